pub mod curve;
mod closed_curve;
mod rect;

pub use closed_curve::ClosedCurve;
pub use curve::{Arc, Curve, CurveDomain, DSection, Ellipse};
pub use rect::Rect;

/// A fillable shape handed to a render sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A closed polygon.
    Polygon(ClosedCurve),
    /// An axis-aligned rectangle.
    Rectangle(Rect),
}

impl Shape {
    /// Returns the shape reflected across the midplane.
    #[must_use]
    pub fn reflected(&self) -> Self {
        match self {
            Self::Polygon(curve) => Self::Polygon(curve.reflected()),
            Self::Rectangle(rect) => Self::Rectangle(rect.reflected()),
        }
    }
}

impl From<ClosedCurve> for Shape {
    fn from(curve: ClosedCurve) -> Self {
        Self::Polygon(curve)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Self::Rectangle(rect)
    }
}
