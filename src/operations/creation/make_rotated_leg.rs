use crate::error::{GeometryError, Result};
use crate::geometry::curve::ensure_finite;
use crate::geometry::ClosedCurve;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Plan-view rectangle of an outboard TF leg, centred on a radial line.
#[derive(Debug, Clone, Copy)]
pub struct MakeRotatedLeg {
    angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    half_width: f64,
}

impl MakeRotatedLeg {
    /// Creates a new `MakeRotatedLeg` operation.
    ///
    /// The leg spans `inner_radius..outer_radius` along the direction at
    /// `angle` and extends `half_width` either side of it.
    #[must_use]
    pub fn new(angle: f64, inner_radius: f64, outer_radius: f64, half_width: f64) -> Self {
        Self {
            angle,
            inner_radius,
            outer_radius,
            half_width,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is non-finite, the half-width is zero or
    /// the outer radius does not exceed the inner one.
    pub fn execute(&self) -> Result<ClosedCurve> {
        let angle = ensure_finite("angle", self.angle)?;
        let half_width = ensure_finite("half_width", self.half_width)?;
        let inner = ensure_finite("inner_radius", self.inner_radius)?;
        let outer = ensure_finite("outer_radius", self.outer_radius)?;
        if half_width.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("TF leg has zero width".into()).into());
        }
        if outer - inner < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "TF leg outer radius {outer} does not exceed inner radius {inner}"
            ))
            .into());
        }
        let radial = Vector2::new(angle.cos(), angle.sin());
        let side = Vector2::new(angle.sin(), -angle.cos()) * half_width;
        let near = Point2::origin() + radial * inner;
        let far = Point2::origin() + radial * outer;
        ClosedCurve::new(vec![near + side, far + side, far - side, near - side])
    }
}
