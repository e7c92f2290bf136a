use std::f64::consts::PI;

use tracing::warn;

use crate::error::Result;
use crate::flags::TfCoilShape;
use crate::geometry::{Rect, Shape};
use crate::math::{Point2, RIGHT_ANGLE, TOLERANCE};
use crate::resolver::{Scan, ValueResolver};

use super::{MakeEllipticalSector, ARC_SAMPLES};

/// The five arc points outlining the inner edge of a TF coil.
///
/// Point 1 tops the straight inboard leg, 2 is the crown, 3 the outboard
/// midplane, 4 the foot and 5 the bottom of the inboard leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfArcPoints {
    /// Radial coordinates of points 1 to 5.
    pub x: [f64; 5],
    /// Vertical coordinates of points 1 to 5.
    pub y: [f64; 5],
}

impl TfArcPoints {
    /// Reads `xarc(1..5)` and `yarc(1..5)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the ten values cannot be read.
    pub fn from_resolver<R: ValueResolver + ?Sized>(resolver: &R, scan: Scan) -> Result<Self> {
        let mut x = [0.0; 5];
        let mut y = [0.0; 5];
        for i in 0..5 {
            x[i] = resolver.get(&format!("xarc({})", i + 1), scan)?;
            y[i] = resolver.get(&format!("yarc({})", i + 1), scan)?;
        }
        if y[2].abs() > TOLERANCE {
            warn!(yarc3 = y[2], "TF coil outboard midplane point yarc(3) is not zero");
        }
        Ok(Self { x, y })
    }
}

/// Builds the poloidal outline of one TF coil from its arc points.
#[derive(Debug, Clone, Copy)]
pub struct MakeTfCoil {
    points: TfArcPoints,
    thickness: f64,
    shape: TfCoilShape,
    samples: usize,
}

impl MakeTfCoil {
    /// Creates a new `MakeTfCoil` operation for a coil of case `thickness`.
    #[must_use]
    pub fn new(points: TfArcPoints, thickness: f64, shape: TfCoilShape) -> Self {
        Self {
            points,
            thickness,
            shape,
            samples: ARC_SAMPLES,
        }
    }

    /// Sets the number of samples per elliptical boundary.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Executes the operation.
    ///
    /// A D-shaped coil yields four elliptical sectors followed by the
    /// straight inboard leg; a picture-frame coil yields its four legs.
    ///
    /// # Errors
    ///
    /// Returns an error if an elliptical sector is degenerate.
    pub fn execute(&self) -> Result<Vec<Shape>> {
        match self.shape {
            TfCoilShape::PictureFrame => Ok(self.picture_frame()),
            TfCoilShape::DShape => self.d_shape(),
        }
    }

    fn picture_frame(&self) -> Vec<Shape> {
        let [x1, x2, _, x4, x5] = self.points.x;
        let [y1, y2, _, y4, y5] = self.points.y;
        let t = self.thickness;
        vec![
            Rect::new(Point2::new(x5 - t, y5 - t), t, y1 - y5 + 2.0 * t).into(),
            Rect::new(Point2::new(x4, y4 - t), t, y2 - y4 + 2.0 * t).into(),
            Rect::new(Point2::new(x5, y5 - t), x4 - x5, t).into(),
            Rect::new(Point2::new(x1, y1), x2 - x1, t).into(),
        ]
    }

    fn d_shape(&self) -> Result<Vec<Shape>> {
        let [x1, x2, x3, x4, x5] = self.points.x;
        let [y1, y2, _, y4, y5] = self.points.y;
        let t = self.thickness;

        // (centre, inner semi-axes, start angle, end angle)
        let sectors = [
            (Point2::new(x2, y1), (x2 - x1, y2 - y1), RIGHT_ANGLE, PI),
            (Point2::new(x2, 0.0), (x3 - x2, y2), 0.0, RIGHT_ANGLE),
            (Point2::new(x4, y5), (x4 - x5, y5 - y4), -RIGHT_ANGLE, -PI),
            (Point2::new(x4, 0.0), (x3 - x4, -y4), 0.0, -RIGHT_ANGLE),
        ];

        let mut shapes = Vec::with_capacity(sectors.len() + 1);
        for (center, (a, b), start, end) in sectors {
            let sector = MakeEllipticalSector::new(center, (a, b), (a + t, b + t), start, end)
                .samples(self.samples)
                .execute()?;
            shapes.push(sector.into());
        }
        shapes.push(Rect::new(Point2::new(x5 - t, y5), t, y1 - y5).into());
        Ok(shapes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::Bounds2;
    use crate::resolver::ScanTable;
    use approx::assert_abs_diff_eq;

    fn demo_points() -> TfArcPoints {
        TfArcPoints {
            x: [4.0, 9.0, 17.0, 9.0, 4.0],
            y: [5.0, 10.0, 0.0, -10.0, -5.0],
        }
    }

    fn extent(shapes: &[Shape]) -> Bounds2 {
        shapes
            .iter()
            .map(|s| match s {
                Shape::Polygon(c) => c.bounds(),
                Shape::Rectangle(r) => r.bounds(),
            })
            .reduce(|a, b| a.union(&b))
            .unwrap()
    }

    #[test]
    fn d_shape_has_four_sectors_and_a_leg() {
        let shapes = MakeTfCoil::new(demo_points(), 1.0, TfCoilShape::DShape)
            .execute()
            .unwrap();
        assert_eq!(shapes.len(), 5);
        assert!(shapes[..4].iter().all(|s| matches!(s, Shape::Polygon(_))));
        assert!(matches!(shapes[4], Shape::Rectangle(_)));
    }

    #[test]
    fn d_shape_envelope() {
        let shapes = MakeTfCoil::new(demo_points(), 1.0, TfCoilShape::DShape)
            .execute()
            .unwrap();
        let b = extent(&shapes);
        assert_abs_diff_eq!(b.min.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.x, 18.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, 11.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.y, -11.0, epsilon = 1e-9);
    }

    #[test]
    fn picture_frame_has_four_legs() {
        let shapes = MakeTfCoil::new(demo_points(), 1.0, TfCoilShape::PictureFrame)
            .execute()
            .unwrap();
        assert_eq!(shapes.len(), 4);
        let Shape::Rectangle(inboard) = &shapes[0] else {
            panic!("inboard leg should be a rectangle");
        };
        assert_abs_diff_eq!(inboard.min().x, 3.0);
        assert_abs_diff_eq!(inboard.height(), 12.0);
    }

    #[test]
    fn degenerate_arc_rejected() {
        let mut points = demo_points();
        points.x[1] = points.x[0];
        let op = MakeTfCoil::new(points, 1.0, TfCoilShape::DShape);
        assert!(op.execute().is_err());
    }

    #[test]
    fn arc_points_read_from_both_arrays() {
        let mut table = ScanTable::new();
        let p = demo_points();
        for i in 0..5 {
            table.insert(format!("xarc({})", i + 1), p.x[i]);
            table.insert(format!("yarc({})", i + 1), p.y[i]);
        }
        assert_eq!(TfArcPoints::from_resolver(&table, Scan::Last).unwrap(), p);
    }

    #[test]
    fn missing_arc_point_is_an_error() {
        let table = ScanTable::new().with("xarc(1)", 4.0);
        assert!(TfArcPoints::from_resolver(&table, Scan::Last).is_err());
    }
}
