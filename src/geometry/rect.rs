use crate::error::Result;
use crate::math::polygon_2d::Bounds2;
use crate::math::Point2;

use super::ClosedCurve;

/// An axis-aligned rectangle stored by its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min: Point2,
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a rectangle from an anchor corner and signed extents.
    ///
    /// Negative extents grow the rectangle left of or below the anchor.
    #[must_use]
    pub fn new(anchor: Point2, width: f64, height: f64) -> Self {
        Self {
            min: Point2::new(anchor.x + width.min(0.0), anchor.y + height.min(0.0)),
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Creates a rectangle centred on `center`.
    #[must_use]
    pub fn centered(center: Point2, width: f64, height: f64) -> Self {
        Self::new(
            Point2::new(center.x - width.abs() / 2.0, center.y - height.abs() / 2.0),
            width.abs(),
            height.abs(),
        )
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.min.x + self.width, self.min.y + self.height)
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        Bounds2 {
            min: self.min,
            max: self.max(),
        }
    }

    /// Returns the rectangle reflected across the midplane.
    #[must_use]
    pub fn reflected(&self) -> Self {
        Self {
            min: Point2::new(self.min.x, -self.min.y - self.height),
            width: self.width,
            height: self.height,
        }
    }

    /// Corners counter-clockwise from the minimum corner.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let max = self.max();
        [
            self.min,
            Point2::new(max.x, self.min.y),
            max,
            Point2::new(self.min.x, max.y),
        ]
    }

    /// Converts the rectangle into a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner is non-finite.
    pub fn to_closed_curve(&self) -> Result<ClosedCurve> {
        ClosedCurve::new(self.corners().to_vec())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn negative_extents_normalise() {
        let r = Rect::new(Point2::new(5.0, 0.0), 1.0, -3.0);
        assert_eq!(r.min(), Point2::new(5.0, -3.0));
        assert_eq!(r.max(), Point2::new(6.0, 0.0));
    }

    #[test]
    fn reflection_mirrors_box() {
        let r = Rect::new(Point2::new(0.0, 1.0), 2.0, 3.0).reflected();
        assert_eq!(r.min(), Point2::new(0.0, -4.0));
        assert_eq!(r.max(), Point2::new(2.0, -1.0));
    }

    #[test]
    fn centred_constructor() {
        let r = Rect::centered(Point2::new(1.0, 1.0), 2.0, 4.0);
        assert_eq!(r.min(), Point2::new(0.0, -1.0));
    }

    #[test]
    fn polygon_area_matches() {
        let c = Rect::new(Point2::origin(), 2.0, 3.0).to_closed_curve().unwrap();
        assert_eq!(c.len(), 5);
        assert_abs_diff_eq!(c.area(), 6.0, epsilon = 1e-12);
    }
}
