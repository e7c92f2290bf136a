use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{
    all_finite, bounds_2d, is_closed, reflect_midplane, signed_area_2d, Bounds2,
};
use crate::math::{Point2, TOLERANCE};

/// An ordered ring of points whose last point repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    points: Vec<Point2>,
}

impl ClosedCurve {
    /// Creates a closed curve, appending the first point if the input is open.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are given or any
    /// coordinate is non-finite.
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "closed curve needs at least 3 points, got {}",
                points.len()
            ))
            .into());
        }
        if !all_finite(&points) {
            return Err(GeometryError::NonFinite {
                parameter: "closed curve point",
            }
            .into());
        }
        if !is_closed(&points, TOLERANCE) {
            points.push(points[0]);
        }
        Ok(Self { points })
    }

    /// Stitches `forward` followed by `backward` reversed into one ring.
    ///
    /// This is how annular fills are built: the outer boundary walked one way
    /// and the inner boundary walked back.
    ///
    /// # Errors
    ///
    /// Same as [`ClosedCurve::new`].
    pub fn stitch(forward: &[Point2], backward: &[Point2]) -> Result<Self> {
        let mut points = Vec::with_capacity(forward.len() + backward.len() + 1);
        points.extend_from_slice(forward);
        points.extend(backward.iter().rev());
        Self::new(points)
    }

    /// Returns the points, closing point included.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points, closing point included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a closed curve has at least four points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the curve reflected across the midplane.
    #[must_use]
    pub fn reflected(&self) -> Self {
        Self {
            points: reflect_midplane(&self.points),
        }
    }

    /// Returns the bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        let first = self.points[0];
        bounds_2d(&self.points).unwrap_or(Bounds2 {
            min: first,
            max: first,
        })
    }

    /// Returns the enclosed area (unsigned).
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points).abs()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn triangle() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn open_input_gets_closed() {
        let c = ClosedCurve::new(triangle()).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.points()[0], c.points()[3]);
        assert_abs_diff_eq!(c.area(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn closed_input_is_unchanged() {
        let mut pts = triangle();
        pts.push(pts[0]);
        assert_eq!(ClosedCurve::new(pts).unwrap().len(), 4);
    }

    #[test]
    fn stitch_reverses_second_boundary() {
        let outer = [Point2::new(2.0, 0.0), Point2::new(0.0, 2.0)];
        let inner = [Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
        let ring = ClosedCurve::stitch(&outer, &inner).unwrap();
        assert_eq!(ring.points()[2], Point2::new(0.0, 1.0));
        assert_eq!(ring.points()[3], Point2::new(1.0, 0.0));
        assert_abs_diff_eq!(ring.area(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn reflection_negates_heights() {
        let c = ClosedCurve::new(triangle()).unwrap();
        let r = c.reflected();
        assert_abs_diff_eq!(r.bounds().min.y, -2.0);
        assert_abs_diff_eq!(r.area(), c.area(), epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(ClosedCurve::new(triangle()[..2].to_vec()).is_err());
        let mut pts = triangle();
        pts[1].x = f64::NAN;
        assert!(ClosedCurve::new(pts).is_err());
    }
}
