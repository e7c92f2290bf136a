use crate::error::Result;
use crate::math::Point2;

use super::{ensure_finite, ensure_nonzero, Curve, CurveDomain};

/// A sector of an axis-aligned ellipse, parametrised by polar angle.
///
/// `P(θ) = center + ρ(θ)·(cos θ, sin θ)` with
/// `ρ(θ) = ((cos θ / a)² + (sin θ / b)²)^(-1/2)`, so `θ` is the true angle
/// of the point seen from the centre rather than the eccentric anomaly.
/// The signs of the semi-axes do not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point2,
    semi_x: f64,
    semi_y: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Ellipse {
    /// Creates a new elliptical sector.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `semi_x` - Horizontal semi-axis (must be non-zero)
    /// * `semi_y` - Vertical semi-axis (must be non-zero)
    /// * `start_angle` - Start polar angle in radians
    /// * `end_angle` - End polar angle in radians
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is zero or any value is non-finite.
    pub fn new(
        center: Point2,
        semi_x: f64,
        semi_y: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        ensure_finite("center.x", center.x)?;
        ensure_finite("center.y", center.y)?;
        Ok(Self {
            center,
            semi_x: ensure_nonzero("semi_x", semi_x)?,
            semi_y: ensure_nonzero("semi_y", semi_y)?,
            start_angle: ensure_finite("start_angle", start_angle)?,
            end_angle: ensure_finite("end_angle", end_angle)?,
        })
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the horizontal semi-axis.
    #[must_use]
    pub fn semi_x(&self) -> f64 {
        self.semi_x
    }

    /// Returns the vertical semi-axis.
    #[must_use]
    pub fn semi_y(&self) -> f64 {
        self.semi_y
    }

    /// Distance from the centre to the ellipse at polar angle `theta`.
    #[must_use]
    pub fn polar_radius(&self, theta: f64) -> f64 {
        let c = theta.cos() / self.semi_x;
        let s = theta.sin() / self.semi_y;
        (c * c + s * s).sqrt().recip()
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point2 {
        let rho = self.polar_radius(t);
        Point2::new(self.center.x + rho * t.cos(), self.center.y + rho * t.sin())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }
}
