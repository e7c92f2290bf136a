use tracing::warn;

use crate::config::Palette;
use crate::error::{Result, SectionError};
use crate::geometry::Shape;
use crate::math::polygon_2d::{bounds_2d, reflect_midplane, Bounds2};
use crate::math::Point2;
use crate::render::{Colour, FillStyle, LineStyle, RenderSink, TextStyle};

use super::Component;

/// Shapes, paths and labels of one sub-shape, drawn together or not at all.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    shapes: Vec<Shape>,
    paths: Vec<(Vec<Point2>, LineStyle)>,
    labels: Vec<(Point2, String, TextStyle)>,
}

impl Layer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filled shape.
    #[must_use]
    pub fn shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    /// Adds several filled shapes.
    #[must_use]
    pub fn shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    /// Adds a stroked path.
    #[must_use]
    pub fn path(mut self, points: Vec<Point2>, style: LineStyle) -> Self {
        self.paths.push((points, style));
        self
    }

    /// Adds a text label.
    #[must_use]
    pub fn label(mut self, at: Point2, text: impl Into<String>, style: TextStyle) -> Self {
        self.labels.push((at, text.into(), style));
        self
    }

    /// Appends the midplane reflection of every shape and path.
    #[must_use]
    pub fn with_reflection(mut self) -> Self {
        let shapes: Vec<Shape> = self.shapes.iter().map(Shape::reflected).collect();
        let paths: Vec<_> = self
            .paths
            .iter()
            .map(|(points, style)| (reflect_midplane(points), style.clone()))
            .collect();
        self.shapes.extend(shapes);
        self.paths.extend(paths);
        self
    }
}

/// A sub-shape that was left out of a figure.
#[derive(Debug)]
pub struct SkippedShape {
    /// Component the sub-shape belongs to.
    pub component: Component,
    /// Which part of the component.
    pub part: &'static str,
    /// Why it was skipped.
    pub error: SectionError,
}

/// Outcome of drawing one figure.
#[derive(Debug, Default)]
pub struct RenderReport {
    skipped: Vec<SkippedShape>,
}

impl RenderReport {
    /// Returns whether every sub-shape was drawn.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Returns the skipped sub-shapes in drawing order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedShape] {
        &self.skipped
    }

    /// Returns whether a part of `component` was skipped.
    #[must_use]
    pub fn skipped_component(&self, component: Component) -> bool {
        self.skipped.iter().any(|s| s.component == component)
    }
}

/// Sink wrapper that groups layers by component, tracks the drawn extent and
/// turns recoverable failures into report entries.
pub(crate) struct Canvas<'a, S: ?Sized> {
    sink: &'a mut S,
    palette: &'a Palette,
    bounds: Option<Bounds2>,
    report: RenderReport,
}

impl<'a, S: RenderSink + ?Sized> Canvas<'a, S> {
    pub(crate) fn new(sink: &'a mut S, palette: &'a Palette) -> Self {
        Self {
            sink,
            palette,
            bounds: None,
            report: RenderReport::default(),
        }
    }

    /// Fill style of a component; transparent fills get a black outline.
    pub(crate) fn fill_style(&self, component: Component) -> FillStyle {
        let face = self.palette.colour(component);
        if face.is_none() {
            FillStyle::solid(face).with_edge(Colour::named("black"))
        } else {
            FillStyle::solid(face)
        }
    }

    /// Builds a layer and draws it in the component's group.
    ///
    /// A recoverable build failure is logged and recorded; the figure
    /// carries on without the sub-shape.
    pub(crate) fn draw(
        &mut self,
        component: Component,
        part: &'static str,
        build: impl FnOnce() -> Result<Layer>,
    ) -> Result<()> {
        let layer = match build() {
            Ok(layer) => layer,
            Err(error) if error.is_recoverable() => {
                warn!(%component, part, %error, "skipping sub-shape");
                self.report.skipped.push(SkippedShape {
                    component,
                    part,
                    error,
                });
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        let style = self.fill_style(component);
        self.sink.begin_group(component.group())?;
        // the group is closed even when drawing fails part way
        let drawn = self.draw_layer(&layer, &style);
        let closed = self.sink.end_group();
        drawn.and(closed)
    }

    fn draw_layer(&mut self, layer: &Layer, style: &FillStyle) -> Result<()> {
        for shape in &layer.shapes {
            self.sink.fill_shape(shape, style)?;
            let extent = match shape {
                Shape::Polygon(curve) => curve.bounds(),
                Shape::Rectangle(rect) => rect.bounds(),
            };
            self.include(extent);
        }
        for (points, line) in &layer.paths {
            self.sink.stroke_path(points, line)?;
            if let Some(extent) = bounds_2d(points) {
                self.include(extent);
            }
        }
        for (at, text, text_style) in &layer.labels {
            self.sink.text(*at, text, text_style)?;
        }
        Ok(())
    }

    pub(crate) fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }

    pub(crate) fn bounds(&self) -> Option<Bounds2> {
        self.bounds
    }

    pub(crate) fn finish(self) -> RenderReport {
        self.report
    }

    fn include(&mut self, extent: Bounds2) {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(&extent),
            None => extent,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::geometry::Rect;
    use crate::render::Figure;

    #[test]
    fn build_failure_is_recorded_and_skipped() {
        let palette = Palette::default();
        let mut fig = Figure::new();
        let mut canvas = Canvas::new(&mut fig, &palette);
        canvas
            .draw(Component::Shield, "upper half", || {
                Err(crate::error::GeometryError::Degenerate("flat".into()).into())
            })
            .unwrap();
        let report = canvas.finish();
        assert!(report.skipped_component(Component::Shield));
        assert!(fig.commands().is_empty());
    }

    #[test]
    fn sink_failure_closes_the_group() {
        let palette = Palette::default();
        let mut fig = Figure::new();
        let mut canvas = Canvas::new(&mut fig, &palette);
        let err = canvas
            .draw(Component::Plasma, "bad path", || {
                Ok(Layer::new()
                    .shape(Rect::new(Point2::origin(), 1.0, 1.0))
                    .path(vec![Point2::origin()], LineStyle::black()))
            })
            .unwrap_err();
        assert!(matches!(err, SectionError::Render(RenderError::Rejected { .. })));
        assert!(matches!(
            fig.end_group(),
            Err(SectionError::Render(RenderError::UnbalancedGroup))
        ));
        assert_eq!(fig.in_group("plasma").count(), 1);
    }
}
