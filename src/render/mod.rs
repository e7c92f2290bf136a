//! The drawing surface the assembler emits shapes to.

mod figure;
mod style;

pub use figure::{DrawCommand, Figure, Recorded};
pub use style::{Colour, FillStyle, HAlign, LineDash, LineStyle, TextStyle, VAlign};

use crate::error::Result;
use crate::geometry::{ClosedCurve, Rect, Shape};
use crate::math::Point2;

/// Title, labels and ranges of one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    /// Figure title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Horizontal range, or `None` to let the backend choose.
    pub x_range: Option<(f64, f64)>,
    /// Vertical range, or `None` to let the backend choose.
    pub y_range: Option<(f64, f64)>,
    /// Whether one unit has the same length on both axes.
    pub equal_aspect: bool,
    /// Whether the axes themselves are drawn.
    pub visible: bool,
}

impl Axes {
    /// Creates visible, equal-aspect axes with automatic ranges.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_range: None,
            y_range: None,
            equal_aspect: true,
            visible: true,
        }
    }

    /// Sets the axis labels.
    #[must_use]
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Fixes both ranges.
    #[must_use]
    pub fn ranges(mut self, x: (f64, f64), y: (f64, f64)) -> Self {
        self.x_range = Some(x);
        self.y_range = Some(y);
        self
    }

    /// Hides the axes.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A plotting backend.
///
/// Every call may fail; the assembler treats a failed call as fatal for the
/// figure being drawn.
pub trait RenderSink {
    /// Sets the title, labels and ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the configuration.
    fn configure_axes(&mut self, axes: &Axes) -> Result<()>;

    /// Fills a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the polygon.
    fn fill_polygon(&mut self, curve: &ClosedCurve, style: &FillStyle) -> Result<()>;

    /// Fills an axis-aligned rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the rectangle.
    fn fill_rectangle(&mut self, rect: &Rect, style: &FillStyle) -> Result<()>;

    /// Strokes an open path.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the path.
    fn stroke_path(&mut self, points: &[Point2], style: &LineStyle) -> Result<()>;

    /// Places a text label.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the label.
    fn text(&mut self, at: Point2, text: &str, style: &TextStyle) -> Result<()>;

    /// Opens a named group; subsequent calls belong to it until
    /// [`end_group`](Self::end_group).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot open the group.
    fn begin_group(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Closes the innermost group.
    ///
    /// # Errors
    ///
    /// Returns an error if no group is open.
    fn end_group(&mut self) -> Result<()> {
        Ok(())
    }

    /// Fills a polygon or rectangle.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying fill call.
    fn fill_shape(&mut self, shape: &Shape, style: &FillStyle) -> Result<()> {
        match shape {
            Shape::Polygon(curve) => self.fill_polygon(curve, style),
            Shape::Rectangle(rect) => self.fill_rectangle(rect, style),
        }
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn configure_axes(&mut self, axes: &Axes) -> Result<()> {
        (**self).configure_axes(axes)
    }

    fn fill_polygon(&mut self, curve: &ClosedCurve, style: &FillStyle) -> Result<()> {
        (**self).fill_polygon(curve, style)
    }

    fn fill_rectangle(&mut self, rect: &Rect, style: &FillStyle) -> Result<()> {
        (**self).fill_rectangle(rect, style)
    }

    fn stroke_path(&mut self, points: &[Point2], style: &LineStyle) -> Result<()> {
        (**self).stroke_path(points, style)
    }

    fn text(&mut self, at: Point2, text: &str, style: &TextStyle) -> Result<()> {
        (**self).text(at, text, style)
    }

    fn begin_group(&mut self, name: &str) -> Result<()> {
        (**self).begin_group(name)
    }

    fn end_group(&mut self) -> Result<()> {
        (**self).end_group()
    }
}
