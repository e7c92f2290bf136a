use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{ensure_finite, Curve, CurveDomain};

/// A circular arc whose zero angle points towards the machine axis.
///
/// `P(t) = (cx − r·cos t, cy + r·sin t)`: `t = 0` is the point nearest the
/// axis, `t = π` the point furthest from it, and increasing `t` sweeps
/// upwards on the near side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or any value is non-finite.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        ensure_finite("center.x", center.x)?;
        ensure_finite("center.y", center.y)?;
        let radius = ensure_finite("radius", radius)?;
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle: ensure_finite("start_angle", start_angle)?,
            end_angle: ensure_finite("end_angle", end_angle)?,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(
            self.center.x - self.radius * t.cos(),
            self.center.y + self.radius * t.sin(),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }
}
