use crate::build::{BuildCategory, CumulativeTable};
use crate::error::Result;
use crate::flags::NullTopology;
use crate::geometry::{DSection, Rect};
use crate::math::Point2;
use crate::operations::creation::{
    GappedDParams, MakeDRing, MakeGappedD, MakeSeparatrix, MakeTfCoil, TfArcPoints,
};
use crate::render::{LineStyle, RenderSink, TextStyle};
use crate::resolver::ValueResolver;

use super::canvas::{Canvas, Layer};
use super::{Component, Run};

/// Which vertical stack backs one half of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// The divertor side, backed by the lower vertical build.
    Divertor,
    /// The side away from the divertor, backed by the upper vertical build.
    Far,
}

/// One explicitly built half of the poloidal section.
#[derive(Debug, Clone, Copy)]
struct Half<'t> {
    side: Side,
    table: &'t CumulativeTable,
    /// `+1` keeps build heights where they are, `-1` flips them across the
    /// midplane.
    sign: f64,
}

impl Half<'_> {
    fn height(&self, segment: &str) -> Result<f64> {
        Ok(self.sign * self.table.including(segment)?)
    }

    fn height_before(&self, segment: &str) -> Result<f64> {
        Ok(self.sign * self.table.excluding(segment)?)
    }

    fn part(&self) -> &'static str {
        let below = match self.side {
            Side::Divertor => self.sign > 0.0,
            Side::Far => self.sign < 0.0,
        };
        if below {
            "lower half"
        } else {
            "upper half"
        }
    }
}

/// Halves that are built explicitly, and whether they are mirrored.
///
/// A double null builds only the divertor side below the midplane and draws
/// its reflection above. A single null builds the divertor side on its
/// named side and the far side opposite.
fn halves<'a, R: ValueResolver + ?Sized>(run: &'a Run<'_, R>) -> (Vec<Half<'a>>, bool) {
    let topology = run.flags.topology;
    let sign = topology.orientation();
    let divertor = Half {
        side: Side::Divertor,
        table: &run.tables.lower,
        sign,
    };
    if topology == NullTopology::DoubleNull {
        return (vec![divertor], true);
    }
    let far = Half {
        side: Side::Far,
        table: &run.tables.upper,
        sign,
    };
    (vec![divertor, far], false)
}

pub(super) fn draw<R, S>(run: &Run<'_, R>, canvas: &mut Canvas<'_, S>) -> Result<()>
where
    R: ValueResolver + ?Sized,
    S: RenderSink + ?Sized,
{
    canvas.draw(Component::Cryostat, "walls", || cryostat(run))?;
    canvas.draw(Component::TfCoil, "coil", || tf_coil(run))?;
    canvas.draw(Component::PfCoil, "coils", || pf_coils(run))?;
    if run.flags.central_solenoid {
        canvas.draw(Component::CentralSolenoid, "solenoid", || central_solenoid(run))?;
    }

    let (halves, mirrored) = halves(run);
    let finish = |layer: Layer| if mirrored { layer.with_reflection() } else { layer };
    for half in &halves {
        canvas.draw(Component::VacuumVessel, half.part(), || {
            vessel(run, half).map(finish)
        })?;
    }
    for half in &halves {
        canvas.draw(Component::Shield, half.part(), || shield(run, half).map(finish))?;
    }
    for half in &halves {
        canvas.draw(Component::Blanket, half.part(), || blanket(run, half).map(finish))?;
    }
    for half in &halves {
        canvas.draw(Component::FirstWall, half.part(), || {
            first_wall(run, half).map(finish)
        })?;
    }

    canvas.draw(Component::Plasma, "separatrix", || plasma(run))?;
    canvas.draw(Component::Plasma, "centre cross", || centre_cross(run))
}

/// Nested D half-section spanning two cumulative radial faces, reaching
/// `height` at its crown.
fn d_section<R: ValueResolver + ?Sized>(
    run: &Run<'_, R>,
    outboard: &str,
    inboard: &str,
    delta: f64,
    height: f64,
) -> Result<DSection> {
    let (r0, a) = run.tables.radial_span(outboard, inboard)?;
    DSection::with_height(r0, a, delta, height)
}

fn ring<R: ValueResolver + ?Sized>(
    run: &Run<'_, R>,
    outer: DSection,
    inner: DSection,
) -> Result<Layer> {
    let ring = MakeDRing::new(outer, inner)
        .samples(run.config.d_section_samples)
        .execute()?;
    Ok(Layer::new().shape(ring))
}

fn gapped<R: ValueResolver + ?Sized>(run: &Run<'_, R>, params: GappedDParams) -> Result<Layer> {
    let patches = MakeGappedD::new(params)
        .gap(run.config.divertor_gap)
        .samples(run.config.d_section_samples)
        .execute()?;
    Ok(patches
        .into_patches()
        .into_iter()
        .fold(Layer::new(), Layer::shape))
}

fn vessel<R: ValueResolver + ?Sized>(run: &Run<'_, R>, half: &Half<'_>) -> Result<Layer> {
    let delta = run.value("triang95")?;
    let top = match half.side {
        Side::Divertor => "d_vv_bot",
        Side::Far => "d_vv_top",
    };
    let outer = d_section(run, "d_vv_out", "gapds", delta, half.height(top)?)?;
    let inner = d_section(run, "shldoth", "d_vv_in", delta, half.height_before(top)?)?;
    ring(run, outer, inner)
}

fn shield<R: ValueResolver + ?Sized>(run: &Run<'_, R>, half: &Half<'_>) -> Result<Layer> {
    let delta = run.value("triang95")?;
    let (top, bottom) = match half.side {
        Side::Divertor => ("shldlth", "divfix"),
        Side::Far => ("shldtth", "vvblgap"),
    };
    let outer = d_section(run, "shldoth", "d_vv_in", delta, half.height(top)?)?;
    let inner = d_section(run, "vvblgapo", "shldith", delta, half.height(bottom)?)?;
    ring(run, outer, inner)
}

fn blanket<R: ValueResolver + ?Sized>(run: &Run<'_, R>, half: &Half<'_>) -> Result<Layer> {
    let delta = run.value("triang")?;
    match half.side {
        Side::Far => {
            let outer = d_section(run, "blnkoth", "vvblgapi", delta, half.height("blnktth")?)?;
            let inner = d_section(run, "fwoth", "blnkith", delta, half.height("fwtth")?)?;
            ring(run, outer, inner)
        }
        Side::Divertor => {
            let vertical = run.thickness(BuildCategory::VerticalUpper, "blnktth")?;
            gapped(
                run,
                GappedDParams {
                    inner_point: run.radial("shldith")?,
                    outer_point: run.radial("blnkoth")?,
                    inner_thickness: run.thickness(BuildCategory::Radial, "blnkith")?,
                    outer_thickness: run.thickness(BuildCategory::Radial, "blnkoth")?,
                    top_point: half.height("divfix")?,
                    top_thickness: -half.sign * vertical,
                    triangularity: delta,
                },
            )
        }
    }
}

fn first_wall<R: ValueResolver + ?Sized>(run: &Run<'_, R>, half: &Half<'_>) -> Result<Layer> {
    let delta = run.value("triang")?;
    match half.side {
        Side::Far => {
            let outer = d_section(run, "fwoth", "blnkith", delta, half.height("fwtth")?)?;
            // the inner surface keeps the outer elongation
            let (r0, a) = run.tables.radial_span("scraplo", "fwith")?;
            let inner = DSection::new(r0, a, delta, outer.elongation())?;
            ring(run, outer, inner)
        }
        Side::Divertor => {
            let blanket = run.thickness(BuildCategory::VerticalUpper, "blnktth")?;
            let wall = run.thickness(BuildCategory::VerticalUpper, "fwtth")?;
            gapped(
                run,
                GappedDParams {
                    inner_point: run.radial("blnkith")?,
                    outer_point: run.radial("fwoth")?,
                    inner_thickness: run.thickness(BuildCategory::Radial, "fwith")?,
                    outer_thickness: run.thickness(BuildCategory::Radial, "fwoth")?,
                    top_point: half.height("divfix")? + half.sign * blanket,
                    top_thickness: -half.sign * wall,
                    triangularity: delta,
                },
            )
        }
    }
}

fn plasma<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let separatrix = MakeSeparatrix::new(
        run.value("rmajor")?,
        run.value("rminor")?,
        1.5 * run.value("triang95")?,
        1.1 * run.value("kappa95")? + 0.04,
        run.flags.topology,
    )
    .samples(run.config.separatrix_samples)
    .execute()?;
    Ok(Layer::new()
        .shape(separatrix.fill)
        .path(separatrix.outboard, LineStyle::black())
        .path(separatrix.inboard, LineStyle::black()))
}

fn centre_cross<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let r = run.value("rmajor")?;
    Ok(Layer::new()
        .path(
            vec![Point2::new(r - 0.25, 0.0), Point2::new(r + 0.25, 0.0)],
            LineStyle::black(),
        )
        .path(
            vec![Point2::new(r, 0.25), Point2::new(r, -0.25)],
            LineStyle::black(),
        ))
}

fn cryostat<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let radius = run.value("rdewex")?;
    let height = run.value("zdewex")?;
    let wall = run.value("ddwex")?;
    let mut layer = Layer::new();
    for sign in [1.0, -1.0] {
        layer = layer
            .shape(Rect::new(Point2::new(radius, 0.0), wall, sign * (height + wall)))
            .shape(Rect::new(Point2::new(0.0, sign * height), radius, sign * wall));
    }
    Ok(layer)
}

fn tf_coil<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let shape = run.flags.tf_shape.clone()?;
    let points = TfArcPoints::from_resolver(run.resolver, run.scan)?;
    let thickness = run.thickness(BuildCategory::Radial, "tfcth")?;
    let shapes = MakeTfCoil::new(points, thickness, shape)
        .samples(run.config.arc_samples)
        .execute()?;
    Ok(Layer::new().shapes(shapes))
}

/// PF coil outlines and numbers. With a central solenoid the last coil
/// entry is the solenoid itself and is left to [`central_solenoid`].
fn pf_coils<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let count = (0..)
        .take_while(|i| run.resolver.exists(&format!("rpf[{i}]")))
        .count();
    let count = if run.flags.central_solenoid {
        count.saturating_sub(1)
    } else {
        count
    };

    let mut layer = Layer::new();
    for i in 0..count {
        let r = run.value(&format!("rpf[{i}]"))?;
        let z = run.value(&format!("zpf[{i}]"))?;
        let dr = run.value(&format!("pfdr[{i}]"))?;
        let dz = run.value(&format!("pfdz[{i}]"))?;
        layer = layer
            .shape(Rect::centered(Point2::new(r, z), dr, dz))
            .label(
                Point2::new(r, z),
                (i + 1).to_string(),
                TextStyle::centered(5.0 * (dr * dz).abs()),
            );
    }
    Ok(layer)
}

fn central_solenoid<R: ValueResolver + ?Sized>(run: &Run<'_, R>) -> Result<Layer> {
    let bore = run.value("bore")?;
    let height = run.value("ohdz")?;
    let thickness = run.thickness(BuildCategory::Radial, "ohcth")?;
    Ok(Layer::new().shape(Rect::new(
        Point2::new(bore, -height / 2.0),
        thickness,
        height,
    )))
}
