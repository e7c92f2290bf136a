//! Configuration flags of a run, decoded once per render.

use crate::error::{ConfigError, Result};
use crate::resolver::{Scan, ValueResolver};

/// Up/down symmetry of the plasma boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullTopology {
    /// X-points top and bottom.
    DoubleNull,
    /// One X-point, below the midplane.
    LowerSingleNull,
    /// One X-point, above the midplane.
    UpperSingleNull,
}

impl NullTopology {
    /// Decodes `i_single_null`: zero, negative or positive.
    #[must_use]
    pub fn from_flag(flag: i64) -> Self {
        match flag.signum() {
            0 => Self::DoubleNull,
            -1 => Self::LowerSingleNull,
            _ => Self::UpperSingleNull,
        }
    }

    /// Returns whether the upper half is the lower half reflected.
    #[must_use]
    pub fn is_double_null(self) -> bool {
        self == Self::DoubleNull
    }

    /// Vertical sense of the divertor side: `+1` when the divertor build
    /// is drawn below the midplane, `-1` when it is drawn above.
    ///
    /// Heights from the lower vertical build are negative, so multiplying by
    /// this sign keeps them below the midplane or flips them above it.
    #[must_use]
    pub fn orientation(self) -> f64 {
        match self {
            Self::DoubleNull | Self::LowerSingleNull => 1.0,
            Self::UpperSingleNull => -1.0,
        }
    }
}

/// Poloidal shape of the TF coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TfCoilShape {
    /// Four elliptical arcs and a straight inboard leg.
    DShape,
    /// Four straight legs.
    PictureFrame,
}

impl TfCoilShape {
    /// Decodes `i_tf_shape` (1 = D-shape, 2 = picture frame).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownShapeSelector`] for any other value.
    pub fn from_selector(value: i64) -> std::result::Result<Self, ConfigError> {
        match value {
            1 => Ok(Self::DShape),
            2 => Ok(Self::PictureFrame),
            _ => Err(ConfigError::UnknownShapeSelector {
                selector: "TF coil shape",
                value,
            }),
        }
    }
}

/// Conductor technology of the TF coils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnetTechnology {
    /// Superconducting coils with a winding pack inside a case.
    Superconducting,
    /// Resistive coils; no winding pack is drawn.
    Resistive,
}

impl MagnetTechnology {
    /// Decodes `i_tf_sup` (1 = superconducting).
    #[must_use]
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Self::Superconducting
        } else {
            Self::Resistive
        }
    }
}

/// How the TF winding pack turns are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnsModel {
    /// Integer turns: a single rectangular pack.
    Integer,
    /// Smeared turns: a stepped pack of two half-depth rectangles.
    NonInteger,
}

impl TurnsModel {
    /// Decodes `i_tf_turns_integer` (1 = integer turns).
    #[must_use]
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Self::Integer
        } else {
            Self::NonInteger
        }
    }
}

/// Primary current drive family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentDrive {
    /// Neutral beam injection; the beam duct is drawn in plan view.
    NeutralBeam,
    /// Electron cyclotron.
    ElectronCyclotron,
    /// Electron Bernstein wave.
    ElectronBernstein,
}

impl CurrentDrive {
    /// Decodes `iefrf`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedCurrentDrive`] for the lower hybrid
    /// and ion cyclotron options, and [`ConfigError::UnknownCurrentDrive`]
    /// for values outside the known set.
    pub fn from_selector(value: i64) -> std::result::Result<Self, ConfigError> {
        match value {
            5 | 8 => Ok(Self::NeutralBeam),
            3 | 7 | 10 | 11 => Ok(Self::ElectronCyclotron),
            12 => Ok(Self::ElectronBernstein),
            1 | 2 | 4 | 6 | 9 => Err(ConfigError::UnsupportedCurrentDrive(value)),
            _ => Err(ConfigError::UnknownCurrentDrive(value)),
        }
    }
}

/// Every branch-selecting flag of a run.
///
/// Selectors that fail to decode are kept as errors so that only the
/// sub-shape depending on them is skipped.
#[derive(Debug, Clone)]
pub struct ReactorFlags {
    /// Plasma null topology.
    pub topology: NullTopology,
    /// TF coil poloidal shape.
    pub tf_shape: std::result::Result<TfCoilShape, ConfigError>,
    /// TF conductor technology.
    pub magnet: MagnetTechnology,
    /// Winding pack turns model.
    pub turns: TurnsModel,
    /// Primary current drive.
    pub current_drive: std::result::Result<CurrentDrive, ConfigError>,
    /// Whether the central solenoid is present.
    pub central_solenoid: bool,
}

impl ReactorFlags {
    /// Reads and decodes the flags of one scan.
    ///
    /// Absent optional flags take their defaults: superconducting magnets,
    /// non-integer turns, D-shaped coils and a central solenoid.
    ///
    /// # Errors
    ///
    /// Returns an error if `i_single_null` cannot be read, or if `iefrf`
    /// is present but cannot be read. A missing `iefrf` is kept as
    /// [`ConfigError::MissingSelector`] in `current_drive`.
    pub fn from_resolver<R: ValueResolver + ?Sized>(resolver: &R, scan: Scan) -> Result<Self> {
        let topology = NullTopology::from_flag(flag(resolver.get("i_single_null", scan)?));
        let current_drive = match resolver.get("iefrf", scan) {
            Ok(value) => CurrentDrive::from_selector(flag(value)),
            Err(e) if e.is_missing_variable() => Err(ConfigError::MissingSelector("iefrf")),
            Err(e) => return Err(e),
        };
        Ok(Self {
            topology,
            tf_shape: TfCoilShape::from_selector(resolver.flag_or("i_tf_shape", scan, 1)?),
            magnet: MagnetTechnology::from_flag(resolver.flag_or("i_tf_sup", scan, 1)?),
            turns: TurnsModel::from_flag(resolver.flag_or("i_tf_turns_integer", scan, 0)?),
            current_drive,
            central_solenoid: resolver.flag_or("iohcl", scan, 1)? != 0,
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn flag(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resolver::ScanTable;

    #[test]
    fn topology_from_sign() {
        assert_eq!(NullTopology::from_flag(0), NullTopology::DoubleNull);
        assert_eq!(NullTopology::from_flag(-1), NullTopology::LowerSingleNull);
        assert_eq!(NullTopology::from_flag(1), NullTopology::UpperSingleNull);
        assert!(NullTopology::DoubleNull.is_double_null());
    }

    #[test]
    fn orientation_flips_only_upper_single_null() {
        assert!((NullTopology::LowerSingleNull.orientation() - 1.0).abs() < f64::EPSILON);
        assert!((NullTopology::UpperSingleNull.orientation() + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_tf_shape_is_an_error() {
        assert_eq!(TfCoilShape::from_selector(2).unwrap(), TfCoilShape::PictureFrame);
        assert!(matches!(
            TfCoilShape::from_selector(3),
            Err(ConfigError::UnknownShapeSelector { value: 3, .. })
        ));
    }

    #[test]
    fn current_drive_families() {
        assert_eq!(CurrentDrive::from_selector(8).unwrap(), CurrentDrive::NeutralBeam);
        assert_eq!(CurrentDrive::from_selector(11).unwrap(), CurrentDrive::ElectronCyclotron);
        assert_eq!(CurrentDrive::from_selector(12).unwrap(), CurrentDrive::ElectronBernstein);
        assert!(matches!(
            CurrentDrive::from_selector(4),
            Err(ConfigError::UnsupportedCurrentDrive(4))
        ));
        assert!(matches!(
            CurrentDrive::from_selector(42),
            Err(ConfigError::UnknownCurrentDrive(42))
        ));
    }

    #[test]
    fn absent_optional_flags_take_defaults() {
        let table = ScanTable::new()
            .with("i_single_null", 1.0)
            .with("iefrf", 10.0);
        let flags = ReactorFlags::from_resolver(&table, Scan::Last).unwrap();
        assert_eq!(flags.topology, NullTopology::UpperSingleNull);
        assert_eq!(flags.magnet, MagnetTechnology::Superconducting);
        assert_eq!(flags.turns, TurnsModel::NonInteger);
        assert_eq!(flags.tf_shape.unwrap(), TfCoilShape::DShape);
        assert!(flags.central_solenoid);
    }

    #[test]
    fn topology_flag_is_required() {
        let table = ScanTable::new().with("iefrf", 10.0);
        let err = ReactorFlags::from_resolver(&table, Scan::Last).unwrap_err();
        assert!(err.is_missing_variable());
    }

    #[test]
    fn missing_current_drive_is_kept_as_error() {
        let table = ScanTable::new().with("i_single_null", 0.0);
        let flags = ReactorFlags::from_resolver(&table, Scan::Last).unwrap();
        assert_eq!(flags.current_drive, Err(ConfigError::MissingSelector("iefrf")));
    }

    #[test]
    fn resistive_integer_picture_frame() {
        let table = ScanTable::new()
            .with("i_single_null", 0.0)
            .with("iefrf", 5.0)
            .with("i_tf_sup", 0.0)
            .with("i_tf_turns_integer", 1.0)
            .with("i_tf_shape", 2.0)
            .with("iohcl", 0.0);
        let flags = ReactorFlags::from_resolver(&table, Scan::Last).unwrap();
        assert_eq!(flags.magnet, MagnetTechnology::Resistive);
        assert_eq!(flags.turns, TurnsModel::Integer);
        assert_eq!(flags.tf_shape.unwrap(), TfCoilShape::PictureFrame);
        assert!(!flags.central_solenoid);
    }
}
