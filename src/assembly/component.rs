use std::fmt;

/// A reactor component with its own colour in the figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    CentralSolenoid,
    CsCompression,
    TfCoil,
    ThermalShield,
    VacuumVessel,
    Shield,
    Blanket,
    FirstWall,
    Plasma,
    PfCoil,
    NbShield,
    Cryostat,
    WindingPack,
}

impl Component {
    /// Label used in the colour key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CentralSolenoid => "CS coil",
            Self::CsCompression => "CS comp",
            Self::TfCoil => "TF coil",
            Self::ThermalShield => "Th shield",
            Self::VacuumVessel => "VV & shield",
            Self::Shield => "Shield",
            Self::Blanket => "Blanket",
            Self::FirstWall => "First wall",
            Self::Plasma => "Plasma",
            Self::PfCoil => "PF coils",
            Self::NbShield => "NB duct shield",
            Self::Cryostat => "cryostat",
            Self::WindingPack => "Winding pack",
        }
    }

    /// Group name under which the component is drawn.
    #[must_use]
    pub fn group(self) -> &'static str {
        match self {
            Self::CentralSolenoid => "central_solenoid",
            Self::CsCompression => "cs_compression",
            Self::TfCoil => "tf_coil",
            Self::ThermalShield => "thermal_shield",
            Self::VacuumVessel => "vacuum_vessel",
            Self::Shield => "shield",
            Self::Blanket => "blanket",
            Self::FirstWall => "first_wall",
            Self::Plasma => "plasma",
            Self::PfCoil => "pf_coils",
            Self::NbShield => "nb_shield",
            Self::Cryostat => "cryostat",
            Self::WindingPack => "winding_pack",
        }
    }

    /// Component filling the toroidal annulus of a radial build segment.
    #[must_use]
    pub fn for_segment(segment: &str) -> Option<Self> {
        Some(match segment {
            "ohcth" => Self::CentralSolenoid,
            "precomp" => Self::CsCompression,
            "tfcth" => Self::TfCoil,
            "thshield_ib" | "thshield_ob" | "thshield_vb" => Self::ThermalShield,
            "d_vv_in" | "d_vv_out" | "d_vv_top" | "d_vv_bot" => Self::VacuumVessel,
            "shldith" | "shldoth" => Self::Shield,
            "blnkith" | "blnkoth" => Self::Blanket,
            "fwith" | "fwoth" => Self::FirstWall,
            "rminor" => Self::Plasma,
            _ => return None,
        })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
