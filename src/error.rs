use thiserror::Error;

use crate::build::BuildCategory;

/// Top-level error type for the cross-section engine.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SectionError {
    /// Returns whether this error reports a variable absent from the resolver.
    #[must_use]
    pub fn is_missing_variable(&self) -> bool {
        matches!(self, Self::Build(BuildError::MissingVariable { .. }))
    }

    /// Returns whether the failure concerns a single sub-shape, so the
    /// assembler may skip it and keep drawing. Sink failures are not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Render(_))
    }
}

/// Errors raised while resolving and accumulating build values.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("variable `{name}` is missing from the run output")]
    MissingVariable { name: String },

    #[error("scan {scan} is out of range for `{name}` ({available} scans available)")]
    ScanOutOfRange {
        name: String,
        scan: usize,
        available: usize,
    },

    #[error("{category} build segment `{segment}` not found")]
    SegmentNotFound {
        segment: String,
        category: BuildCategory,
    },
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite value for {parameter}")]
    NonFinite { parameter: &'static str },
}

/// Errors caused by configuration flags that cannot be visualised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown {selector} selector: {value}")]
    UnknownShapeSelector { selector: &'static str, value: i64 },

    #[error("unknown current drive selector: {0}")]
    UnknownCurrentDrive(i64),

    #[error("current drive option {0} has no geometry")]
    UnsupportedCurrentDrive(i64),

    #[error("selector `{0}` is missing from the run output")]
    MissingSelector(&'static str),
}

/// Errors reported by a render sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot draw {shape}: {reason}")]
    Rejected { shape: &'static str, reason: String },

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("end_group called with no open group")]
    UnbalancedGroup,
}

/// Convenience type alias for results using [`SectionError`].
pub type Result<T> = std::result::Result<T, SectionError>;
