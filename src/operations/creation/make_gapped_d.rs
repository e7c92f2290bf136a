use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::{GeometryError, Result};
use crate::geometry::{ClosedCurve, Curve, CurveDomain, DSection};
use crate::math::polygon_2d::reflect_midplane;

use super::D_SECTION_SAMPLES;

/// Default angular width of the divertor opening.
pub const DEFAULT_DIVERTOR_GAP: f64 = FRAC_PI_4;

/// Inputs of a thick D-section with a gap at the top.
///
/// Points are cumulative radial or vertical positions; thicknesses are the
/// component's own build values. A negative `top_point` draws the section
/// below the midplane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GappedDParams {
    /// Inboard face of the component.
    pub inner_point: f64,
    /// Outboard face of the component.
    pub outer_point: f64,
    /// Inboard thickness.
    pub inner_thickness: f64,
    /// Outboard thickness.
    pub outer_thickness: f64,
    /// Height of the outer boundary at its peak.
    pub top_point: f64,
    /// Vertical thickness subtracted from `top_point` for the inner boundary.
    pub top_thickness: f64,
    /// Triangularity.
    pub triangularity: f64,
}

impl GappedDParams {
    /// Returns the parameters of the same section on the other side of the
    /// midplane.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            top_point: -self.top_point,
            top_thickness: -self.top_thickness,
            ..*self
        }
    }
}

/// The two closed patches of a gapped D-section.
#[derive(Debug, Clone, PartialEq)]
pub struct GappedD {
    /// Patch starting at the outboard midplane.
    pub outboard: ClosedCurve,
    /// Patch starting at the inboard midplane.
    pub inboard: ClosedCurve,
}

impl GappedD {
    /// Returns both patches, outboard first.
    #[must_use]
    pub fn into_patches(self) -> [ClosedCurve; 2] {
        [self.outboard, self.inboard]
    }
}

/// Builds a thick D-section whose top is cut open for the divertor.
///
/// From the inputs two nested D half-sections are derived:
///
/// * `r01 = (inner + outer) / 2`, `a1 = r01 − inner`, `κ1 = top / a1`
/// * `r02 = (inner + t_in + outer − t_out) / 2`, `a2 = r02 − inner − t_in`,
///   `κ2 = (top − t_top) / a2`
///
/// The outboard patch covers `θ ∈ [0, π/2 − gap/2]`. The inboard patch is
/// sampled over `θ ∈ [π, π + π/2 − gap]`, where `sin θ < 0`, and mirrored
/// back across the midplane so it lies on the same side as the outboard one.
#[derive(Debug, Clone, Copy)]
pub struct MakeGappedD {
    params: GappedDParams,
    gap: f64,
    samples: usize,
}

impl MakeGappedD {
    /// Creates a new `MakeGappedD` operation with the default gap.
    #[must_use]
    pub fn new(params: GappedDParams) -> Self {
        Self {
            params,
            gap: DEFAULT_DIVERTOR_GAP,
            samples: D_SECTION_SAMPLES,
        }
    }

    /// Sets the angular width of the opening.
    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the number of samples per boundary.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Returns the outer and inner D half-sections.
    ///
    /// # Errors
    ///
    /// Returns an error if either half-width collapses.
    pub fn sections(&self) -> Result<(DSection, DSection)> {
        let p = &self.params;
        let r01 = (p.inner_point + p.outer_point) / 2.0;
        let r02 = (p.inner_point + p.inner_thickness + p.outer_point - p.outer_thickness) / 2.0;
        let a1 = r01 - p.inner_point;
        let a2 = r02 - p.inner_point - p.inner_thickness;
        let outer = DSection::with_height(r01, a1, p.triangularity, p.top_point)?;
        let inner =
            DSection::with_height(r02, a2, p.triangularity, p.top_point - p.top_thickness)?;
        Ok((outer, inner))
    }

    /// Executes the operation, returning both closed patches.
    ///
    /// # Errors
    ///
    /// Returns an error if the gap is outside `(0, π)` or the sections are
    /// degenerate.
    pub fn execute(&self) -> Result<GappedD> {
        if !(self.gap > 0.0 && self.gap < PI) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "gap",
                value: self.gap,
                min: 0.0,
                max: PI,
            }
            .into());
        }
        let (outer, inner) = self.sections()?;

        let outboard = CurveDomain::new(0.0, FRAC_PI_2 - self.gap / 2.0);
        let outboard = ClosedCurve::stitch(
            &outer.with_domain(outboard).sample(self.samples),
            &inner.with_domain(outboard).sample(self.samples),
        )?;

        let inboard = CurveDomain::new(PI, PI + FRAC_PI_2 - self.gap);
        let inboard = ClosedCurve::stitch(
            &reflect_midplane(&outer.with_domain(inboard).sample(self.samples)),
            &reflect_midplane(&inner.with_domain(inboard).sample(self.samples)),
        )?;

        Ok(GappedD { outboard, inboard })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::is_closed;
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;

    fn blanket(triangularity: f64) -> GappedDParams {
        GappedDParams {
            inner_point: 5.0,
            outer_point: 13.0,
            inner_thickness: 0.7,
            outer_thickness: 1.0,
            top_point: -7.0,
            top_thickness: -0.8,
            triangularity,
        }
    }

    #[test]
    fn patches_close_for_all_triangularities() {
        for i in 0..=20 {
            let delta = -1.0 + 0.1 * f64::from(i);
            let gapped = MakeGappedD::new(blanket(delta)).execute().unwrap();
            for patch in gapped.into_patches() {
                assert!(is_closed(patch.points(), TOLERANCE));
                assert!(patch.area() > 0.0);
            }
        }
    }

    #[test]
    fn section_algebra() {
        let (outer, inner) = MakeGappedD::new(blanket(0.4)).sections().unwrap();
        assert_abs_diff_eq!(outer.r0(), 9.0);
        assert_abs_diff_eq!(outer.half_width(), 4.0);
        assert_abs_diff_eq!(outer.elongation(), -7.0 / 4.0);
        assert_abs_diff_eq!(inner.r0(), 8.85, epsilon = 1e-12);
        assert_abs_diff_eq!(inner.half_width(), 3.15, epsilon = 1e-12);
        assert_abs_diff_eq!(inner.elongation(), -6.2 / 3.15, epsilon = 1e-12);
    }

    #[test]
    fn negative_top_stays_below_midplane() {
        let gapped = MakeGappedD::new(blanket(0.4)).execute().unwrap();
        for patch in [&gapped.outboard, &gapped.inboard] {
            assert!(patch.points().iter().all(|p| p.y <= TOLERANCE));
        }
        assert!(gapped.outboard.bounds().max.x > gapped.inboard.bounds().max.x);
    }

    #[test]
    fn patches_start_on_the_midplane_faces() {
        let gapped = MakeGappedD::new(blanket(0.4)).execute().unwrap();
        let out0 = gapped.outboard.points()[0];
        assert_abs_diff_eq!(out0.x, 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out0.y, 0.0, epsilon = 1e-12);
        let in0 = gapped.inboard.points()[0];
        assert_abs_diff_eq!(in0.x, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn flipped_params_mirror_the_patches() {
        let lower = MakeGappedD::new(blanket(0.3)).execute().unwrap();
        let upper = MakeGappedD::new(blanket(0.3).flipped()).execute().unwrap();
        for (l, u) in lower.outboard.points().iter().zip(upper.outboard.points()) {
            assert_abs_diff_eq!(l.x, u.x, epsilon = 1e-12);
            assert_abs_diff_eq!(l.y, -u.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn invalid_gap_rejected() {
        assert!(MakeGappedD::new(blanket(0.0)).gap(0.0).execute().is_err());
        assert!(MakeGappedD::new(blanket(0.0)).gap(4.0).execute().is_err());
    }

    #[test]
    fn collapsed_inner_section_rejected() {
        let mut p = blanket(0.0);
        p.inner_thickness = 5.0;
        p.outer_thickness = 5.0;
        assert!(MakeGappedD::new(p).execute().is_err());
    }
}
