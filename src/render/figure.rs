use crate::error::{RenderError, Result};
use crate::geometry::{ClosedCurve, Rect};
use crate::math::polygon_2d::{all_finite, bounds_2d, Bounds2};
use crate::math::Point2;

use super::{Axes, FillStyle, LineStyle, RenderSink, TextStyle};

/// One drawing call captured by a [`Figure`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillPolygon { curve: ClosedCurve, style: FillStyle },
    FillRectangle { rect: Rect, style: FillStyle },
    StrokePath { points: Vec<Point2>, style: LineStyle },
    Text { at: Point2, text: String, style: TextStyle },
}

impl DrawCommand {
    /// Extent of the command, or `None` for text.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds2> {
        match self {
            Self::FillPolygon { curve, .. } => Some(curve.bounds()),
            Self::FillRectangle { rect, .. } => Some(rect.bounds()),
            Self::StrokePath { points, .. } => bounds_2d(points),
            Self::Text { .. } => None,
        }
    }
}

/// A command together with the group it was issued in.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    /// Innermost open group, if any.
    pub group: Option<String>,
    /// The drawing call.
    pub command: DrawCommand,
}

/// An in-memory sink that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    axes: Option<Axes>,
    commands: Vec<Recorded>,
    groups: Vec<String>,
}

impl Figure {
    /// Creates an empty figure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last axes configuration.
    #[must_use]
    pub fn axes(&self) -> Option<&Axes> {
        self.axes.as_ref()
    }

    /// Returns every recorded command in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[Recorded] {
        &self.commands
    }

    /// Returns the commands issued inside `group`.
    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a DrawCommand> + 'a {
        self.commands
            .iter()
            .filter(move |r| r.group.as_deref() == Some(group))
            .map(|r| &r.command)
    }

    /// Returns the polygons filled inside `group`.
    pub fn polygons_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ClosedCurve> + 'a {
        self.in_group(group).filter_map(|c| match c {
            DrawCommand::FillPolygon { curve, .. } => Some(curve),
            _ => None,
        })
    }

    /// Returns the rectangles filled inside `group`.
    pub fn rectangles_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Rect> + 'a {
        self.in_group(group).filter_map(|c| match c {
            DrawCommand::FillRectangle { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// Returns the distinct group names in the order they were first used.
    #[must_use]
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.commands.iter().filter_map(|r| r.group.as_deref()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Extent of everything drawn, text excluded.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds2> {
        self.commands
            .iter()
            .filter_map(|r| r.command.bounds())
            .reduce(|a, b| a.union(&b))
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(Recorded {
            group: self.groups.last().cloned(),
            command,
        });
    }
}

fn reject(shape: &'static str, reason: &str) -> crate::error::SectionError {
    RenderError::Rejected {
        shape,
        reason: reason.to_owned(),
    }
    .into()
}

impl RenderSink for Figure {
    fn configure_axes(&mut self, axes: &Axes) -> Result<()> {
        let ranges = [axes.x_range, axes.y_range];
        for (lo, hi) in ranges.into_iter().flatten() {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(reject("axes", "range must be finite and increasing"));
            }
        }
        self.axes = Some(axes.clone());
        Ok(())
    }

    fn fill_polygon(&mut self, curve: &ClosedCurve, style: &FillStyle) -> Result<()> {
        self.record(DrawCommand::FillPolygon {
            curve: curve.clone(),
            style: style.clone(),
        });
        Ok(())
    }

    fn fill_rectangle(&mut self, rect: &Rect, style: &FillStyle) -> Result<()> {
        if !all_finite(&rect.corners()) {
            return Err(reject("rectangle", "non-finite corner"));
        }
        self.record(DrawCommand::FillRectangle {
            rect: *rect,
            style: style.clone(),
        });
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point2], style: &LineStyle) -> Result<()> {
        if points.len() < 2 {
            return Err(reject("path", "needs at least two points"));
        }
        if !all_finite(points) {
            return Err(reject("path", "non-finite point"));
        }
        self.record(DrawCommand::StrokePath {
            points: points.to_vec(),
            style: style.clone(),
        });
        Ok(())
    }

    fn text(&mut self, at: Point2, text: &str, style: &TextStyle) -> Result<()> {
        if !all_finite(&[at]) {
            return Err(reject("text", "non-finite anchor"));
        }
        self.record(DrawCommand::Text {
            at,
            text: text.to_owned(),
            style: *style,
        });
        Ok(())
    }

    fn begin_group(&mut self, name: &str) -> Result<()> {
        self.groups.push(name.to_owned());
        Ok(())
    }

    fn end_group(&mut self) -> Result<()> {
        self.groups
            .pop()
            .map(|_| ())
            .ok_or_else(|| RenderError::UnbalancedGroup.into())
    }
}
