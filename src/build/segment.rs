use std::fmt;

/// Which stack a build segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildCategory {
    /// Inboard to outboard along the midplane.
    Radial,
    /// Midplane upwards.
    VerticalUpper,
    /// Midplane downwards, through the divertor.
    VerticalLower,
}

impl BuildCategory {
    /// Sign applied to each thickness when accumulating.
    ///
    /// The lower stack grows downwards, so its cumulative values are negative.
    #[must_use]
    pub fn step_sign(self) -> f64 {
        match self {
            Self::Radial | Self::VerticalUpper => 1.0,
            Self::VerticalLower => -1.0,
        }
    }

    /// The standard stacking order for this category.
    #[must_use]
    pub fn standard_sequence(self) -> SegmentSequence {
        match self {
            Self::Radial => RADIAL_BUILD,
            Self::VerticalUpper => VERTICAL_UPPER,
            Self::VerticalLower => VERTICAL_LOWER,
        }
    }
}

impl fmt::Display for BuildCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Radial => "radial",
            Self::VerticalUpper => "upper vertical",
            Self::VerticalLower => "lower vertical",
        })
    }
}

/// One named thickness in a build stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSegment {
    /// Segment name as it appears in the stacking order.
    pub name: &'static str,
    /// The stack it belongs to.
    pub category: BuildCategory,
}

/// An explicit stacking order of build segments.
///
/// The order is the physical order of components and must not be rearranged.
/// A name may appear more than once; lookups stop at its first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSequence {
    category: BuildCategory,
    names: &'static [&'static str],
}

impl SegmentSequence {
    /// Creates a sequence for `category` from names in stacking order.
    #[must_use]
    pub const fn new(category: BuildCategory, names: &'static [&'static str]) -> Self {
        Self { category, names }
    }

    /// Returns the category of every segment in the sequence.
    #[must_use]
    pub fn category(&self) -> BuildCategory {
        self.category
    }

    /// Returns the segment names in stacking order.
    #[must_use]
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the position of the first occurrence of `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// Iterates over the segments in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = BuildSegment> + '_ {
        let category = self.category;
        self.names
            .iter()
            .map(move |&name| BuildSegment { name, category })
    }
}

/// Radial build, bore to outboard TF leg.
pub const RADIAL_BUILD: SegmentSequence = SegmentSequence::new(
    BuildCategory::Radial,
    &[
        "bore",
        "ohcth",
        "precomp",
        "gapoh",
        "tfcth",
        "tftsgap",
        "thshield_ib",
        "gapds",
        "d_vv_in",
        "shldith",
        "vvblgapi",
        "blnkith",
        "fwith",
        "scrapli",
        "rminori",
        "rminoro",
        "scraplo",
        "fwoth",
        "blnkoth",
        "vvblgapo",
        "shldoth",
        "d_vv_out",
        "gapsto",
        "thshield_ob",
        "tftsgap",
        "tfthko",
    ],
);

/// Vertical build above the midplane.
pub const VERTICAL_UPPER: SegmentSequence = SegmentSequence::new(
    BuildCategory::VerticalUpper,
    &[
        "rminor*kappa",
        "vgaptop",
        "fwtth",
        "blnktth",
        "vvblgap",
        "shldtth",
        "d_vv_top",
        "vgap2",
        "thshield_vb",
        "tftsgap",
        "tfcth",
    ],
);

/// Vertical build below the midplane, through the divertor.
pub const VERTICAL_LOWER: SegmentSequence = SegmentSequence::new(
    BuildCategory::VerticalLower,
    &[
        "rminor*kappa",
        "vgap",
        "divfix",
        "shldlth",
        "d_vv_bot",
        "vgap2",
        "thshield_vb",
        "tftsgap",
        "tfcth",
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_order_runs_bore_to_outboard_leg() {
        let names = RADIAL_BUILD.names();
        assert_eq!(names.first(), Some(&"bore"));
        assert_eq!(names.last(), Some(&"tfthko"));
        assert!(RADIAL_BUILD.position("rminori") < RADIAL_BUILD.position("rminoro"));
        assert!(RADIAL_BUILD.position("d_vv_in") < RADIAL_BUILD.position("d_vv_out"));
    }

    #[test]
    fn repeated_name_finds_first_occurrence() {
        assert_eq!(RADIAL_BUILD.position("tftsgap"), Some(5));
    }

    #[test]
    fn categories_carry_through_iteration() {
        assert!(VERTICAL_LOWER
            .iter()
            .all(|s| s.category == BuildCategory::VerticalLower));
        assert_eq!(VERTICAL_UPPER.iter().count(), VERTICAL_UPPER.len());
    }

    #[test]
    fn lower_stack_accumulates_downwards() {
        assert!(BuildCategory::VerticalLower.step_sign() < 0.0);
        assert!(BuildCategory::Radial.step_sign() > 0.0);
        assert_eq!(
            BuildCategory::VerticalUpper.standard_sequence(),
            VERTICAL_UPPER
        );
    }
}
