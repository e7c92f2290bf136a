use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{ensure_finite, ensure_nonzero, Curve, CurveDomain};

/// Half of a thin D-shaped section centred on the midplane.
///
/// `r(θ) = r0 + a·cos(θ + δ·sin θ)`, `z(θ) = κ·a·sin θ`.
///
/// The default domain `θ ∈ [0, π]` runs from the outboard midplane over the
/// top to the inboard midplane. A negative elongation draws the half below
/// the midplane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DSection {
    r0: f64,
    a: f64,
    delta: f64,
    kappa: f64,
    domain: CurveDomain,
}

impl DSection {
    /// Creates a new D-section over `θ ∈ [0, π]`.
    ///
    /// # Arguments
    ///
    /// * `r0` - Radius of the centre
    /// * `a` - Horizontal half-width (must be positive)
    /// * `delta` - Triangularity
    /// * `kappa` - Signed elongation (must be non-zero)
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is non-finite, the half-width is not
    /// positive, or the elongation is zero.
    pub fn new(r0: f64, a: f64, delta: f64, kappa: f64) -> Result<Self> {
        let r0 = ensure_finite("r0", r0)?;
        let a = ensure_finite("a", a)?;
        if a < TOLERANCE {
            return Err(
                GeometryError::Degenerate("D-section half-width must be positive".into()).into(),
            );
        }
        let delta = ensure_finite("delta", delta)?;
        let kappa = ensure_nonzero("kappa", kappa)?;
        Ok(Self {
            r0,
            a,
            delta,
            kappa,
            domain: CurveDomain::new(0.0, PI),
        })
    }

    /// Creates a D-section whose elongation is given as the height reached at
    /// `θ = π/2`, i.e. `κ = height / a`.
    ///
    /// # Errors
    ///
    /// Same as [`DSection::new`].
    pub fn with_height(r0: f64, a: f64, delta: f64, height: f64) -> Result<Self> {
        let a = ensure_nonzero("a", a)?;
        Self::new(r0, a, delta, height / a)
    }

    /// Restricts the curve to another parameter range.
    #[must_use]
    pub fn with_domain(mut self, domain: CurveDomain) -> Self {
        self.domain = domain;
        self
    }

    /// Returns the centre radius.
    #[must_use]
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Returns the horizontal half-width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.a
    }

    /// Returns the triangularity.
    #[must_use]
    pub fn triangularity(&self) -> f64 {
        self.delta
    }

    /// Returns the signed elongation.
    #[must_use]
    pub fn elongation(&self) -> f64 {
        self.kappa
    }
}

impl Curve for DSection {
    fn evaluate(&self, t: f64) -> Point2 {
        let r = self.r0 + self.a * (t + self.delta * t.sin()).cos();
        let z = self.kappa * self.a * t.sin();
        Point2::new(r, z)
    }

    fn domain(&self) -> CurveDomain {
        self.domain
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::bounds_2d;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn midplane_and_peak_points() {
        let d = DSection::new(9.0, 3.0, 0.5, 1.8).unwrap();
        let start = d.evaluate(0.0);
        let end = d.evaluate(PI);
        let peak = d.evaluate(FRAC_PI_2);
        assert_abs_diff_eq!(start.x, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.x, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(peak.y, 1.8 * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn reference_d_spans_expected_box() {
        let upper = DSection::new(9.0, 3.0, 0.5, 1.8).unwrap();
        let lower = DSection::new(9.0, 3.0, 0.5, -1.8).unwrap();
        let mut pts = upper.sample(201);
        pts.extend(lower.sample(201));
        let b = bounds_2d(&pts).unwrap();
        assert_abs_diff_eq!(b.min.x, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.x, 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.y, -5.4, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, 5.4, epsilon = 1e-9);
    }

    #[test]
    fn triangularity_shifts_the_top_inboard() {
        let d = DSection::new(9.0, 3.0, 0.5, 1.8).unwrap();
        let peak = d.evaluate(FRAC_PI_2);
        assert_abs_diff_eq!(peak.x, 9.0 + 3.0 * (FRAC_PI_2 + 0.5).cos(), epsilon = 1e-12);
        assert!(peak.x < 9.0);
    }

    #[test]
    fn height_constructor() {
        let d = DSection::with_height(5.0, 2.0, 0.0, -6.0).unwrap();
        assert_abs_diff_eq!(d.elongation(), -3.0);
        assert_abs_diff_eq!(d.evaluate(FRAC_PI_2).y, -6.0, epsilon = 1e-12);
    }

    #[test]
    fn restricted_domain() {
        let d = DSection::new(5.0, 1.0, 0.0, 1.0)
            .unwrap()
            .with_domain(CurveDomain::new(0.0, FRAC_PI_2));
        let pts = d.sample(3);
        assert_abs_diff_eq!(pts[2].x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[2].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_inputs_rejected() {
        assert!(DSection::new(9.0, 0.0, 0.5, 1.8).is_err());
        assert!(DSection::new(9.0, -1.0, 0.5, 1.8).is_err());
        assert!(DSection::new(9.0, 3.0, 0.5, 0.0).is_err());
        assert!(DSection::new(9.0, 3.0, f64::NAN, 1.8).is_err());
        assert!(DSection::with_height(9.0, 0.0, 0.5, 4.0).is_err());
    }
}
