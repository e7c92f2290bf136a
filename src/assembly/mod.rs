//! Composes component shapes into the poloidal, toroidal and colour-key
//! figures.

mod canvas;
mod component;
mod poloidal;
mod toroidal;

pub use canvas::{Layer, RenderReport, SkippedShape};
pub use component::Component;

use tracing::debug;

use crate::build::{BuildAccumulator, BuildCategory, BuildTables};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::flags::ReactorFlags;
use crate::geometry::Rect;
use crate::math::polygon_2d::Bounds2;
use crate::math::Point2;
use crate::render::{Axes, HAlign, RenderSink, TextStyle, VAlign};
use crate::resolver::{Scan, ValueResolver};

use canvas::Canvas;

/// Colour key rows: component, label height and swatch height.
const KEY_ROWS: [(Component, f64, f64); 11] = [
    (Component::CentralSolenoid, 10.0, 9.7),
    (Component::CsCompression, 9.0, 8.7),
    (Component::TfCoil, 8.0, 7.7),
    (Component::ThermalShield, 7.0, 6.7),
    (Component::VacuumVessel, 6.0, 5.7),
    (Component::Blanket, 5.0, 4.7),
    (Component::FirstWall, 4.0, 3.7),
    (Component::Plasma, 3.0, 2.7),
    (Component::PfCoil, 2.0, 1.7),
    (Component::NbShield, 1.0, 0.7),
    (Component::Cryostat, 0.1, -0.3),
];

/// Draws the cross-section figures of one scan of a run.
///
/// Flags and build tables are read afresh for every figure. Sub-shapes that
/// cannot be built are logged, reported and left out; only a failing sink or
/// an unreadable topology or current-drive flag aborts a figure.
#[derive(Debug)]
pub struct CrossSectionAssembler<'r, R: ?Sized> {
    resolver: &'r R,
    scan: Scan,
    config: RenderConfig,
}

impl<'r, R: ValueResolver + ?Sized> CrossSectionAssembler<'r, R> {
    /// Creates an assembler with the default configuration.
    #[must_use]
    pub fn new(resolver: &'r R, scan: Scan) -> Self {
        Self {
            resolver,
            scan,
            config: RenderConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Draws the poloidal (R, Z) cross-section.
    ///
    /// # Errors
    ///
    /// Returns an error if the flags cannot be read, the build tables cannot
    /// be accumulated or the sink fails.
    pub fn poloidal<S: RenderSink + ?Sized>(&self, sink: &mut S) -> Result<RenderReport> {
        let run = self.prepare()?;
        let mut canvas = Canvas::new(sink, &self.config.palette);
        poloidal::draw(&run, &mut canvas)?;

        let axes = Axes::new("Poloidal cross-section").labels("R / m", "Z / m");
        let axes = if self.config.fixed_ranges {
            axes.ranges((0.0, 20.0), (-15.0, 15.0))
        } else {
            adaptive(axes, canvas.bounds(), self.config.axis_margin, false)
        };
        canvas.sink().configure_axes(&axes)?;
        Ok(canvas.finish())
    }

    /// Draws the toroidal (x, y) quarter plan view at the midplane.
    ///
    /// # Errors
    ///
    /// Returns an error if the flags cannot be read, the build tables cannot
    /// be accumulated or the sink fails.
    pub fn toroidal<S: RenderSink + ?Sized>(&self, sink: &mut S) -> Result<RenderReport> {
        let run = self.prepare()?;
        let mut canvas = Canvas::new(sink, &self.config.palette);
        toroidal::draw(&run, &mut canvas)?;

        let axes = Axes::new("Toroidal cross-section").labels("x / m", "y / m");
        let axes = if self.config.fixed_ranges {
            axes.ranges((0.0, 20.0), (0.0, 20.0))
        } else {
            adaptive(axes, canvas.bounds(), self.config.axis_margin, true)
        };
        canvas.sink().configure_axes(&axes)?;
        Ok(canvas.finish())
    }

    /// Draws the colour key: one labelled swatch per component.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn colour_key<S: RenderSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let mut canvas = Canvas::new(sink, &self.config.palette);
        let text = TextStyle::centered(10.0).anchored(HAlign::Left, VAlign::Top);
        for (component, label_y, swatch_y) in KEY_ROWS {
            canvas.draw(component, "key", || {
                Ok(Layer::new()
                    .shape(Rect::new(Point2::new(0.2, swatch_y), 1.0, 0.4))
                    .label(Point2::new(-5.0, label_y), component.label(), text))
            })?;
        }
        let axes = Axes::new("").ranges((0.0, 10.0), (0.0, 10.0)).hidden();
        canvas.sink().configure_axes(&axes)
    }

    fn prepare(&self) -> Result<Run<'_, R>> {
        let flags = ReactorFlags::from_resolver(self.resolver, self.scan)?;
        let accumulator =
            BuildAccumulator::new(self.resolver, self.scan).verbose(self.config.verbose);
        let tables = accumulator.tables()?;
        debug!(scan = %self.scan, topology = ?flags.topology, "assembling cross-section");
        Ok(Run {
            resolver: self.resolver,
            scan: self.scan,
            config: &self.config,
            flags,
            tables,
            accumulator,
        })
    }
}

/// Everything read from the run for one figure.
pub(crate) struct Run<'a, R: ?Sized> {
    resolver: &'a R,
    scan: Scan,
    config: &'a RenderConfig,
    flags: ReactorFlags,
    tables: BuildTables,
    accumulator: BuildAccumulator<'a, R>,
}

impl<R: ValueResolver + ?Sized> Run<'_, R> {
    fn value(&self, name: &str) -> Result<f64> {
        self.resolver.get(name, self.scan)
    }

    /// Cumulative radial build up to and including `segment`.
    fn radial(&self, segment: &str) -> Result<f64> {
        self.tables.radial.including(segment)
    }

    /// Unsigned thickness of `segment` as accumulated, zero if missing.
    fn thickness(&self, category: BuildCategory, segment: &str) -> Result<f64> {
        Ok(self.tables.get(category).entry(segment)?.increment.abs())
    }
}

/// Adaptive ranges: x starts at the axis, upper bounds follow the drawn
/// extent plus a margin. `floor_y` also starts y at zero.
fn adaptive(axes: Axes, bounds: Option<Bounds2>, margin: f64, floor_y: bool) -> Axes {
    let Some(b) = bounds else {
        return axes;
    };
    let x_max = b.max.x.max(0.0);
    let (y_min, y_max) = if floor_y {
        (0.0, b.max.y.max(0.0))
    } else {
        (b.min.y, b.max.y)
    };
    let pad_x = margin * x_max;
    let pad_y = margin * (y_max - y_min);
    if x_max + pad_x <= 0.0 || y_max - y_min + 2.0 * pad_y <= 0.0 {
        return axes;
    }
    let y_range = if floor_y {
        (0.0, y_max + pad_y)
    } else {
        (y_min - pad_y, y_max + pad_y)
    };
    axes.ranges((0.0, x_max + pad_x), y_range)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::reference_run;
    use crate::render::{DrawCommand, Figure};
    use approx::assert_abs_diff_eq;

    #[test]
    fn colour_key_has_one_swatch_per_row() {
        let table = reference_run();
        let mut fig = Figure::new();
        CrossSectionAssembler::new(&table, Scan::Last)
            .colour_key(&mut fig)
            .unwrap();
        let swatches = fig
            .commands()
            .iter()
            .filter(|r| matches!(r.command, DrawCommand::FillRectangle { .. }))
            .count();
        let labels = fig
            .commands()
            .iter()
            .filter(|r| matches!(r.command, DrawCommand::Text { .. }))
            .count();
        assert_eq!(swatches, KEY_ROWS.len());
        assert_eq!(labels, KEY_ROWS.len());
        assert!(!fig.axes().unwrap().visible);
    }

    #[test]
    fn transparent_swatch_is_outlined() {
        let table = reference_run();
        let mut fig = Figure::new();
        CrossSectionAssembler::new(&table, Scan::Last)
            .colour_key(&mut fig)
            .unwrap();
        let pf = fig.in_group(Component::PfCoil.group()).find_map(|c| match c {
            DrawCommand::FillRectangle { style, .. } => Some(style.clone()),
            _ => None,
        });
        let style = pf.unwrap();
        assert!(style.face.is_none());
        assert!(style.edge.is_some());
    }

    #[test]
    fn adaptive_ranges_start_at_axis() {
        let bounds = Bounds2 {
            min: Point2::new(2.0, -10.0),
            max: Point2::new(18.0, 10.0),
        };
        let axes = adaptive(Axes::new("t"), Some(bounds), 0.05, false);
        let (x0, x1) = axes.x_range.unwrap();
        let (y0, y1) = axes.y_range.unwrap();
        assert_abs_diff_eq!(x0, 0.0);
        assert_abs_diff_eq!(x1, 18.9, epsilon = 1e-12);
        assert_abs_diff_eq!(y0, -11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y1, 11.0, epsilon = 1e-12);

        let floored = adaptive(Axes::new("t"), Some(bounds), 0.0, true);
        assert_abs_diff_eq!(floored.y_range.unwrap().0, 0.0);
        assert!(adaptive(Axes::new("t"), None, 0.05, true).x_range.is_none());
    }
}
