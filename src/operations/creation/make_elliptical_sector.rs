use crate::error::Result;
use crate::geometry::{ClosedCurve, Curve, Ellipse};
use crate::math::Point2;

use super::ARC_SAMPLES;

/// Fills the space between two concentric ellipse sectors.
#[derive(Debug, Clone, Copy)]
pub struct MakeEllipticalSector {
    center: Point2,
    first: (f64, f64),
    second: (f64, f64),
    start_angle: f64,
    end_angle: f64,
    samples: usize,
}

impl MakeEllipticalSector {
    /// Creates a new `MakeEllipticalSector` operation.
    ///
    /// # Arguments
    ///
    /// * `center` - Shared centre of both ellipses
    /// * `first` - Horizontal and vertical semi-axes of the first boundary
    /// * `second` - Horizontal and vertical semi-axes of the second boundary
    /// * `start_angle`, `end_angle` - Polar span of the sector
    #[must_use]
    pub fn new(
        center: Point2,
        first: (f64, f64),
        second: (f64, f64),
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            first,
            second,
            start_angle,
            end_angle,
            samples: ARC_SAMPLES,
        }
    }

    /// Sets the number of samples per boundary.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Executes the operation: first boundary forward, second backward.
    ///
    /// # Errors
    ///
    /// Returns an error if a semi-axis is zero or the patch is degenerate.
    pub fn execute(&self) -> Result<ClosedCurve> {
        let first = Ellipse::new(
            self.center,
            self.first.0,
            self.first.1,
            self.start_angle,
            self.end_angle,
        )?;
        let second = Ellipse::new(
            self.center,
            self.second.0,
            self.second.1,
            self.start_angle,
            self.end_angle,
        )?;
        ClosedCurve::stitch(&first.sample(self.samples), &second.sample(self.samples))
    }
}
