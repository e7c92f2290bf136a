use std::f64::consts::TAU;

use crate::build::{BuildAccumulator, BuildCategory};
use crate::error::{GeometryError, Result};
use crate::flags::{CurrentDrive, MagnetTechnology, TurnsModel};
use crate::geometry::Rect;
use crate::math::sampling::linspace;
use crate::math::{Point2, RIGHT_ANGLE, TOLERANCE};
use crate::operations::creation::{MakeQuarterAnnulus, MakeRotatedLeg};
use crate::render::{Colour, HAlign, LineDash, LineStyle, RenderSink, TextStyle, VAlign};
use crate::resolver::ValueResolver;

use super::canvas::{Canvas, Layer};
use super::{Component, Run};

/// Radial build segments filled as quarter annuli, inboard to outboard.
const FILLED_SEGMENTS: [&str; 13] = [
    "ohcth",
    "precomp",
    "tfcth",
    "thshield_ib",
    "d_vv_in",
    "shldith",
    "blnkith",
    "fwith",
    "fwoth",
    "blnkoth",
    "shldoth",
    "d_vv_out",
    "thshield_ob",
];

/// Radii and spacing of the TF coils in plan view.
struct CoilLayout {
    /// Inner face of the inboard legs.
    inboard_inner: f64,
    /// Outer face of the inboard legs.
    inboard_outer: f64,
    /// Inner face of the outboard legs.
    outboard_inner: f64,
    /// Outer face of the outboard legs.
    outboard_outer: f64,
    /// Angle between neighbouring coils.
    spacing: f64,
    /// Coils drawn in the first quadrant.
    count: usize,
}

impl CoilLayout {
    fn new<R: ValueResolver + ?Sized>(
        run: &Run<'_, R>,
        build: &BuildAccumulator<'_, R>,
    ) -> Result<Self> {
        let n_tf = run.value("n_tf")?;
        if !(n_tf >= 1.0 && n_tf.is_finite()) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "n_tf",
                value: n_tf,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let outboard = build.cumulative_pair(BuildCategory::Radial, "tfthko")?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (n_tf / 4.0).floor() as usize + 1;
        Ok(Self {
            inboard_inner: build.cumulative(BuildCategory::Radial, "gapoh")?,
            inboard_outer: build.cumulative(BuildCategory::Radial, "tfcth")?,
            outboard_inner: outboard.excluding,
            outboard_outer: outboard.including,
            spacing: TAU / n_tf,
            count,
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| i as f64 * self.spacing)
    }

    /// Half-width of a coil at the outer face of the inboard legs.
    fn half_width(&self) -> f64 {
        self.inboard_outer * (self.spacing / 2.0).tan()
    }
}

pub(super) fn draw<R, S>(run: &Run<'_, R>, canvas: &mut Canvas<'_, S>) -> Result<()>
where
    R: ValueResolver + ?Sized,
    S: RenderSink + ?Sized,
{
    let build = run.accumulator.clone().verbose(false);

    canvas.draw(Component::Plasma, "major radius", || major_radius(run))?;
    for segment in FILLED_SEGMENTS {
        if let Some(component) = Component::for_segment(segment) {
            canvas.draw(component, segment, || annulus(run, &build, segment))?;
        }
    }
    canvas.draw(Component::Plasma, "plasma", || plasma(run))?;
    canvas.draw(Component::Cryostat, "cryostat", || cryostat(run))?;

    let layout = match CoilLayout::new(run, &build) {
        Ok(layout) => layout,
        Err(e) => return canvas.draw(Component::TfCoil, "coils", || Err(e)),
    };
    canvas.draw(Component::TfCoil, "inboard segments", || Ok(inboard_segments(&layout)))?;
    canvas.draw(Component::NbShield, "leg shielding", || {
        legs(&layout, run.value("nbshield")?)
    })?;
    canvas.draw(Component::TfCoil, "outboard legs", || legs(&layout, 0.0))?;
    if run.flags.magnet == MagnetTechnology::Superconducting {
        canvas.draw(Component::WindingPack, "winding packs", || {
            winding_packs(run, &layout)
        })?;
    }
    match &run.flags.current_drive {
        Ok(CurrentDrive::NeutralBeam) => {
            canvas.draw(Component::NbShield, "beam duct", || beam_duct(run, &layout))
        }
        Ok(_) => Ok(()),
        Err(e) => canvas.draw(Component::NbShield, "beam duct", || Err(e.clone().into())),
    }
}

fn quarter_arc(radius: f64, samples: usize) -> Vec<Point2> {
    linspace(0.0, RIGHT_ANGLE, samples)
        .into_iter()
        .map(|t| Point2::new(radius * t.cos(), radius * t.sin()))
        .collect()
}

fn major_radius<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let style = LineStyle::new(Colour::named("black"), 0.2)?.dash(LineDash::Dashed);
    Ok(Layer::new().path(quarter_arc(run.value("rmajor")?, run.config.arc_samples), style))
}

fn annulus<R: ValueResolver + ?Sized>(
    run: &Run<'_, R>,
    build: &BuildAccumulator<'_, R>,
    segment: &str,
) -> Result<Layer> {
    let pair = build.cumulative_pair(BuildCategory::Radial, segment)?;
    if pair.including - pair.excluding < TOLERANCE {
        return Ok(Layer::new());
    }
    let fill = MakeQuarterAnnulus::new(pair.excluding, pair.including)
        .samples(run.config.arc_samples)
        .execute()?;
    Ok(Layer::new().shape(fill))
}

fn plasma<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let rmajor = run.value("rmajor")?;
    let rminor = run.value("rminor")?;
    let fill = MakeQuarterAnnulus::new(rmajor - rminor, rmajor + rminor)
        .samples(run.config.arc_samples)
        .execute()?;
    Ok(Layer::new().shape(fill).label(
        Point2::new(rmajor * 0.3_f64.cos(), rmajor * 0.3_f64.sin()),
        "plasma",
        TextStyle::centered(12.0),
    ))
}

fn cryostat<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let radius = run.value("rdewex")?;
    let outer = radius + run.value("ddwex")?;
    let fill = MakeQuarterAnnulus::new(radius, outer)
        .samples(run.config.arc_samples)
        .execute()?;
    let corner = outer / 1.41;
    Ok(Layer::new().shape(fill).label(
        Point2::new(corner, corner),
        "cryostat",
        TextStyle::centered(10.0).anchored(HAlign::Left, VAlign::Bottom),
    ))
}

/// Side lines of each inboard leg, half a spacing either side of the coil
/// centreline.
fn inboard_segments(layout: &CoilLayout) -> Layer {
    let half = layout.spacing / 2.0;
    let mut layer = Layer::new();
    for centre in layout.angles() {
        for angle in [centre - half, centre + half] {
            let direction = Point2::new(angle.cos(), angle.sin()).coords;
            layer = layer.path(
                vec![
                    Point2::from(direction * layout.inboard_inner),
                    Point2::from(direction * layout.inboard_outer),
                ],
                LineStyle::black(),
            );
        }
    }
    layer
}

fn legs(layout: &CoilLayout, margin: f64) -> Result<Layer> {
    let half_width = layout.half_width() + margin;
    let mut layer = Layer::new();
    for angle in layout.angles() {
        let leg = MakeRotatedLeg::new(
            angle,
            layout.outboard_inner,
            layout.outboard_outer,
            half_width,
        )
        .execute()?;
        layer = layer.shape(leg);
    }
    Ok(layer)
}

/// Winding packs of the inboard and outboard legs on the x axis.
///
/// Integer turns give one rectangle per leg; otherwise the pack is stepped,
/// two half-depth rectangles with the wider one towards the plasma.
fn winding_packs<R: ValueResolver + ?Sized>(
    run: &Run<'_, R>,
    layout: &CoilLayout,
) -> Result<Layer> {
    let insulation = run.value("tinstf")?;
    let depth = run.value("dr_tf_wp")?;
    let wide = run.value("wwp1")? / 2.0;
    let inboard = layout.inboard_inner + run.value("thkcas")? + insulation;
    let outboard = layout.outboard_inner + run.value("casthi")? + insulation;

    let layer = Layer::new();
    Ok(match run.flags.turns {
        TurnsModel::Integer => layer
            .shape(Rect::new(Point2::new(inboard, 0.0), depth, wide))
            .shape(Rect::new(Point2::new(outboard, 0.0), depth, wide)),
        TurnsModel::NonInteger => {
            let narrow = run.value("wwp2")? / 2.0;
            let step = depth / 2.0;
            layer
                .shape(Rect::new(Point2::new(inboard, 0.0), step, narrow))
                .shape(Rect::new(Point2::new(inboard + step, 0.0), step, wide))
                .shape(Rect::new(Point2::new(outboard, 0.0), step, wide))
                .shape(Rect::new(Point2::new(outboard + step, 0.0), step, narrow))
        }
    })
}

/// Edges of the neutral beam duct, from the beam tangency circle to the
/// corner of the shielded outboard leg.
fn beam_duct<R: ValueResolver + ?Sized>(run: &Run<'_, R>, layout: &CoilLayout) -> Result<Layer> {
    let shielding = run.value("nbshield")?;
    let beam_width = run.value("beamwd")?;
    let tangency = run.value("rtanbeam")?;
    let outboard_leg = run.thickness(BuildCategory::Radial, "tfthko")?;
    let w = layout.half_width();

    let reach = w.hypot(layout.outboard_inner + outboard_leg);
    let inner_radius = tangency - beam_width;
    let outer_radius = tangency + beam_width;
    let beta = (inner_radius / reach).clamp(-1.0, 1.0).acos();
    let direction = Point2::new(beta.cos(), beta.sin()).coords;
    let corner = Point2::new(layout.outboard_outer, w + shielding);
    // duct width less one shield thickness
    let opening = beam_width + shielding;

    let style = LineStyle::black().dash(LineDash::Dotted);
    Ok(Layer::new()
        .path(
            vec![Point2::from(direction * inner_radius), corner],
            style.clone(),
        )
        .path(
            vec![
                Point2::from(direction * outer_radius),
                corner + direction * opening,
            ],
            style,
        ))
}
