use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated closing
/// point contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns whether the first and last points coincide within `tolerance`.
#[must_use]
pub fn is_closed(points: &[Point2], tolerance: f64) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => (first - last).norm() <= tolerance,
        _ => false,
    }
}

/// Reflects points across the midplane (`y = 0`).
#[must_use]
pub fn reflect_midplane(points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|p| Point2::new(p.x, -p.y)).collect()
}

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Returns the union of two boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = *self;
        merged.include(&other.min);
        merged.include(&other.max);
        merged
    }
}

/// Computes the bounding box of a point set, or `None` if it is empty.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<Bounds2> {
    let (first, rest) = points.split_first()?;
    let mut bounds = Bounds2 {
        min: *first,
        max: *first,
    };
    for p in rest {
        bounds.include(p);
    }
    Some(bounds)
}

/// Returns whether every coordinate is finite.
#[must_use]
pub fn all_finite(points: &[Point2]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}
