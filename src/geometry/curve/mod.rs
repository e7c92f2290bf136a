mod arc;
mod d_section;
mod ellipse;

pub use arc::Arc;
pub use d_section::DSection;
pub use ellipse::Ellipse;

use crate::error::{GeometryError, Result};
use crate::math::sampling::linspace;
use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain. `t_max` may be smaller than `t_min`, in
    /// which case sampling runs backwards.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in the poloidal or plan-view plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Samples `count` evenly spaced parameters over the domain, ends included.
    fn sample(&self, count: usize) -> Vec<Point2> {
        let domain = self.domain();
        linspace(domain.t_min, domain.t_max, count)
            .into_iter()
            .map(|t| self.evaluate(t))
            .collect()
    }
}

/// Rejects NaN and infinite construction parameters.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter }.into())
    }
}

/// Rejects lengths whose magnitude is too small to divide by.
pub(crate) fn ensure_nonzero(parameter: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(parameter, value)?;
    if value.abs() < crate::math::TOLERANCE {
        return Err(GeometryError::Degenerate(format!("{parameter} must be non-zero")).into());
    }
    Ok(value)
}
