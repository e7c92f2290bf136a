use std::fmt;

use crate::error::{RenderError, Result};

/// A colour name understood by the plotting backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Colour(String);

impl Colour {
    /// The transparent colour.
    pub const NONE: &'static str = "none";

    /// Creates a colour from a backend name such as `"khaki"` or `"#ff00ff"`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns a transparent colour.
    #[must_use]
    pub fn none() -> Self {
        Self(Self::NONE.to_owned())
    }

    /// Returns whether the colour is transparent.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }

    /// Returns the backend name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Style of a filled area.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    /// Face colour.
    pub face: Colour,
    /// Edge colour, if the outline is drawn.
    pub edge: Option<Colour>,
}

impl FillStyle {
    /// A fill without an outline.
    #[must_use]
    pub fn solid(face: Colour) -> Self {
        Self { face, edge: None }
    }

    /// Adds an outline.
    #[must_use]
    pub fn with_edge(mut self, edge: Colour) -> Self {
        self.edge = Some(edge);
        self
    }
}

/// Dash pattern of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Style of a stroked path.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    colour: Colour,
    width: f64,
    dash: LineDash,
}

impl LineStyle {
    /// Creates a solid line style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is negative or non-finite.
    pub fn new(colour: Colour, width: f64) -> Result<Self> {
        if !(width >= 0.0 && width.is_finite()) {
            return Err(RenderError::InvalidStyle(format!(
                "line width {width} must be non-negative"
            ))
            .into());
        }
        Ok(Self {
            colour,
            width,
            dash: LineDash::Solid,
        })
    }

    /// A thin solid black line.
    #[must_use]
    pub fn black() -> Self {
        Self {
            colour: Colour::named("black"),
            width: 1.0,
            dash: LineDash::Solid,
        }
    }

    /// Sets the dash pattern.
    #[must_use]
    pub fn dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    /// Returns the line colour.
    #[must_use]
    pub fn colour(&self) -> &Colour {
        &self.colour
    }

    /// Returns the line width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the dash pattern.
    #[must_use]
    pub fn dash_pattern(&self) -> LineDash {
        self.dash
    }
}

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Style of a text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    /// Horizontal anchor.
    pub h_align: HAlign,
    /// Vertical anchor.
    pub v_align: VAlign,
}

impl TextStyle {
    /// Centred text of the given size.
    #[must_use]
    pub fn centered(size: f64) -> Self {
        Self {
            size,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
        }
    }

    /// Sets the anchors.
    #[must_use]
    pub fn anchored(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}
