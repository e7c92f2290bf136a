//! Settings of one render.

use std::collections::HashMap;
use std::f64::consts::FRAC_PI_4;

use crate::assembly::Component;
use crate::operations::creation::{ARC_SAMPLES, D_SECTION_SAMPLES, SEPARATRIX_SAMPLES};
use crate::render::Colour;

/// Colour of every component.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: HashMap<Component, Colour>,
}

impl Palette {
    /// Returns the colour of `component`, transparent if unset.
    #[must_use]
    pub fn colour(&self, component: Component) -> Colour {
        self.colours
            .get(&component)
            .cloned()
            .unwrap_or_else(Colour::none)
    }

    /// Overrides the colour of `component`.
    #[must_use]
    pub fn with(mut self, component: Component, colour: Colour) -> Self {
        self.colours.insert(component, colour);
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colours = [
            (Component::CentralSolenoid, "pink"),
            (Component::CsCompression, "red"),
            (Component::TfCoil, "cyan"),
            (Component::ThermalShield, "gray"),
            (Component::VacuumVessel, "green"),
            (Component::Shield, "green"),
            (Component::Blanket, "magenta"),
            (Component::FirstWall, "darkblue"),
            (Component::Plasma, "khaki"),
            (Component::PfCoil, Colour::NONE),
            (Component::NbShield, "gray"),
            (Component::Cryostat, "red"),
            (Component::WindingPack, "blue"),
        ]
        .into_iter()
        .map(|(component, name)| (component, Colour::named(name)))
        .collect();
        Self { colours }
    }
}

/// Parameters controlling how the figures are drawn.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per nested-D half-section.
    pub d_section_samples: usize,
    /// Samples per separatrix arc.
    pub separatrix_samples: usize,
    /// Samples per elliptical or circular arc.
    pub arc_samples: usize,
    /// Angular width of the divertor opening in gapped D-sections.
    pub divertor_gap: f64,
    /// Use the fixed comparison ranges instead of adaptive ones.
    pub fixed_ranges: bool,
    /// Relative padding added to adaptive upper bounds.
    pub axis_margin: f64,
    /// Report recovered build lookups at warning level.
    pub verbose: bool,
    /// Component colours.
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            d_section_samples: D_SECTION_SAMPLES,
            separatrix_samples: SEPARATRIX_SAMPLES,
            arc_samples: ARC_SAMPLES,
            divertor_gap: FRAC_PI_4,
            fixed_ranges: false,
            axis_margin: 0.05,
            verbose: true,
            palette: Palette::default(),
        }
    }
}
