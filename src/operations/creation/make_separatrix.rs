use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::flags::NullTopology;
use crate::geometry::curve::ensure_finite;
use crate::geometry::{Arc, ClosedCurve, Curve};
use crate::math::{Point2, TOLERANCE};

use super::SEPARATRIX_SAMPLES;

/// Angular extension of the outboard arc past its X-point, times `r1`.
const OUTBOARD_LEG: f64 = 1.0;
/// Angular extension of the inboard arc past its X-point, times `r2`.
const INBOARD_LEG: f64 = 1.5;

/// The plasma boundary drawn as two circular arcs meeting at the X-points.
#[derive(Debug, Clone, PartialEq)]
pub struct Separatrix {
    /// Outboard arc, legs included.
    pub outboard: Vec<Point2>,
    /// Inboard arc, legs included.
    pub inboard: Vec<Point2>,
    /// Region between the arcs, limited to `|z| <= κa`.
    pub fill: ClosedCurve,
}

/// Builds the separatrix from major radius, minor radius, triangularity and
/// elongation.
///
/// Each side is a circle through the X-points `(R0 - δa, ±κa)` and the
/// midplane point `R0 ± a`. The circle centres and radii are
///
/// ```text
/// x1 = (2R0(1+δ) - a(δ²+κ²-1)) / (2(1+δ))    r1 = a((1+δ)²+κ²) / (2|1+δ|)
/// x2 = (2R0(δ-1) - a(δ²+κ²-1)) / (2(δ-1))    r2 = a((δ-1)²+κ²) / (2|δ-1|)
/// ```
///
/// and points are `(x - r·cos t, r·sin t)`.
#[derive(Debug, Clone, Copy)]
pub struct MakeSeparatrix {
    major_radius: f64,
    minor_radius: f64,
    triangularity: f64,
    elongation: f64,
    topology: NullTopology,
    samples: usize,
}

struct Circle {
    x: f64,
    r: f64,
    theta: f64,
}

impl MakeSeparatrix {
    /// Creates a new `MakeSeparatrix` operation.
    #[must_use]
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        triangularity: f64,
        elongation: f64,
        topology: NullTopology,
    ) -> Self {
        Self {
            major_radius,
            minor_radius,
            triangularity,
            elongation,
            topology,
            samples: SEPARATRIX_SAMPLES,
        }
    }

    /// Sets the number of samples per arc.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Executes the operation.
    ///
    /// Legs extend past the X-point at both ends for a double null and only
    /// at the X-point end for a single null.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive minor radius or elongation, a
    /// triangularity of exactly `±1`, or any non-finite input.
    pub fn execute(&self) -> Result<Separatrix> {
        let r0 = ensure_finite("major_radius", self.major_radius)?;
        let a = positive("minor_radius", self.minor_radius)?;
        let kappa = positive("elongation", self.elongation)?;
        let delta = ensure_finite("triangularity", self.triangularity)?;
        let plus = 1.0 + delta;
        let minus = delta - 1.0;
        if plus.abs() < TOLERANCE || minus.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "separatrix triangularity {delta} puts an X-point on the midplane"
            ))
            .into());
        }

        let height = kappa * a;
        let shape = delta * delta + kappa * kappa - 1.0;
        let circle = |x: f64, r: f64| Circle {
            x,
            r,
            theta: (height / r).clamp(-1.0, 1.0).asin(),
        };
        let outer = circle(
            (2.0 * r0 * plus - a * shape) / (2.0 * plus),
            0.5 * a * (plus * plus + kappa * kappa) / plus.abs(),
        );
        let inner = circle(
            (2.0 * r0 * minus - a * shape) / (2.0 * minus),
            0.5 * a * (minus * minus + kappa * kappa) / minus.abs(),
        );

        let l1 = OUTBOARD_LEG / outer.r;
        let l2 = INBOARD_LEG / inner.r;
        let (t1, t2) = (outer.theta, inner.theta);
        let (outer_span, inner_span) = match self.topology {
            NullTopology::DoubleNull => ((PI - l1 - t1, PI + t1 + l1), (-(l2 + t2), t2 + l2)),
            NullTopology::LowerSingleNull => ((PI - t1, PI + t1 + l1), (-(l2 + t2), t2)),
            NullTopology::UpperSingleNull => ((PI - l1 - t1, PI + t1), (-t2, t2 + l2)),
        };

        let outboard = arc(&outer, outer_span)?.sample(self.samples);
        let inboard = arc(&inner, inner_span)?.sample(self.samples);

        let mut fill = arc(&outer, (PI - t1, PI + t1))?.sample(self.samples);
        fill.extend(arc(&inner, (-t2, t2))?.sample(self.samples));

        Ok(Separatrix {
            outboard,
            inboard,
            fill: ClosedCurve::new(fill)?,
        })
    }
}

fn arc(circle: &Circle, (start, end): (f64, f64)) -> Result<Arc> {
    Arc::new(Point2::new(circle.x, 0.0), circle.r, start, end)
}

fn positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value > TOLERANCE && value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: TOLERANCE,
            max: f64::INFINITY,
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference(topology: NullTopology) -> Separatrix {
        MakeSeparatrix::new(9.0, 3.0, 0.5, 1.8, topology)
            .execute()
            .unwrap()
    }

    #[test]
    fn fill_spans_minor_radius_and_height() {
        let s = reference(NullTopology::DoubleNull);
        let b = s.fill.bounds();
        assert_abs_diff_eq!(b.min.x, 6.0, epsilon = 1e-3);
        assert_abs_diff_eq!(b.max.x, 12.0, epsilon = 1e-3);
        assert_abs_diff_eq!(b.max.y, 5.4, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.y, -5.4, epsilon = 1e-9);
    }

    #[test]
    fn arcs_meet_at_the_x_points() {
        let s = reference(NullTopology::DoubleNull);
        let pts = s.fill.points();
        let outer_end = pts[SEPARATRIX_SAMPLES - 1];
        let inner_start = pts[SEPARATRIX_SAMPLES];
        assert_abs_diff_eq!(outer_end.x, 7.5, epsilon = 1e-9);
        assert_abs_diff_eq!(outer_end.y, -5.4, epsilon = 1e-9);
        assert_abs_diff_eq!(inner_start.x, 7.5, epsilon = 1e-9);
        assert_abs_diff_eq!(inner_start.y, -5.4, epsilon = 1e-9);
    }

    #[test]
    fn double_null_is_up_down_symmetric() {
        let s = reference(NullTopology::DoubleNull);
        let first = s.outboard[0];
        let last = s.outboard[s.outboard.len() - 1];
        assert_abs_diff_eq!(first.y, -last.y, epsilon = 1e-9);
        assert!(first.y > 5.4);
    }

    #[test]
    fn lower_single_null_extends_below_only() {
        let s = reference(NullTopology::LowerSingleNull);
        let top = s.outboard.iter().chain(&s.inboard).map(|p| p.y).fold(f64::MIN, f64::max);
        let bottom = s.outboard.iter().chain(&s.inboard).map(|p| p.y).fold(f64::MAX, f64::min);
        assert_abs_diff_eq!(top, 5.4, epsilon = 1e-9);
        assert!(bottom < -5.4);
    }

    #[test]
    fn upper_single_null_extends_above_only() {
        let s = reference(NullTopology::UpperSingleNull);
        let bottom = s.outboard.iter().chain(&s.inboard).map(|p| p.y).fold(f64::MAX, f64::min);
        assert_abs_diff_eq!(bottom, -5.4, epsilon = 1e-9);
        assert!(s.inboard[s.inboard.len() - 1].y > 5.4);
    }

    #[test]
    fn degenerate_inputs_rejected() {
        let make = |a, d, k| MakeSeparatrix::new(9.0, a, d, k, NullTopology::DoubleNull).execute();
        assert!(make(0.0, 0.5, 1.8).is_err());
        assert!(make(3.0, 1.0, 1.8).is_err());
        assert!(make(3.0, -1.0, 1.8).is_err());
        assert!(make(3.0, 0.5, 0.0).is_err());
        assert!(make(3.0, f64::NAN, 1.8).is_err());
    }
}
