use crate::error::{GeometryError, Result};
use crate::geometry::{ClosedCurve, Curve, CurveDomain, DSection};
use crate::math::{Point2, RIGHT_ANGLE, TOLERANCE};

use super::ARC_SAMPLES;

/// Fills the plan-view quarter annulus between two radii.
///
/// Each boundary is a D half-section centred on the axis with zero
/// triangularity and unit elongation, i.e. a circle, over `[0, π/2]`.
#[derive(Debug, Clone, Copy)]
pub struct MakeQuarterAnnulus {
    inner_radius: f64,
    outer_radius: f64,
    samples: usize,
}

impl MakeQuarterAnnulus {
    /// Creates a new `MakeQuarterAnnulus` operation.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            samples: ARC_SAMPLES,
        }
    }

    /// Sets the number of samples per boundary.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Executes the operation, walking the inner arc outwards from the x axis
    /// and the outer arc back.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is negative or non-finite, or the outer
    /// radius does not exceed the inner one.
    pub fn execute(&self) -> Result<ClosedCurve> {
        if !(self.inner_radius >= 0.0 && self.inner_radius.is_finite()) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "inner_radius",
                value: self.inner_radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let min_outer = self.inner_radius + TOLERANCE;
        if !(self.outer_radius >= min_outer && self.outer_radius.is_finite()) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "outer_radius",
                value: self.outer_radius,
                min: min_outer,
                max: f64::INFINITY,
            }
            .into());
        }
        let inner = if self.inner_radius < TOLERANCE {
            vec![Point2::origin()]
        } else {
            self.quarter(self.inner_radius)?
        };
        let outer = self.quarter(self.outer_radius)?;
        ClosedCurve::stitch(&inner, &outer)
    }

    fn quarter(&self, radius: f64) -> Result<Vec<Point2>> {
        Ok(DSection::new(0.0, radius, 0.0, 1.0)?
            .with_domain(CurveDomain::new(0.0, RIGHT_ANGLE))
            .sample(self.samples))
    }
}
