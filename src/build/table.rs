use crate::error::{BuildError, Result};

use super::BuildCategory;

/// One row of a cumulative table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeEntry {
    /// Segment name.
    pub name: &'static str,
    /// Signed thickness added by this segment.
    pub increment: f64,
    /// Running sum up to and including this segment.
    pub cumulative: f64,
}

/// Running sums of one build stack, in stacking order.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable {
    category: BuildCategory,
    entries: Vec<CumulativeEntry>,
}

impl CumulativeTable {
    /// Creates a table from entries already in stacking order.
    #[must_use]
    pub fn new(category: BuildCategory, entries: Vec<CumulativeEntry>) -> Self {
        Self { category, entries }
    }

    /// Returns the category of the table.
    #[must_use]
    pub fn category(&self) -> BuildCategory {
        self.category
    }

    /// Returns the rows in stacking order.
    #[must_use]
    pub fn entries(&self) -> &[CumulativeEntry] {
        &self.entries
    }

    /// Returns the running sum over the whole stack.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.cumulative)
    }

    /// Returns the first row named `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SegmentNotFound`] if the stack has no such segment.
    pub fn entry(&self, segment: &str) -> Result<&CumulativeEntry> {
        self.entries
            .iter()
            .find(|e| e.name == segment)
            .ok_or_else(|| {
                BuildError::SegmentNotFound {
                    segment: segment.to_owned(),
                    category: self.category,
                }
                .into()
            })
    }

    /// Running sum up to and including `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SegmentNotFound`] if the stack has no such segment.
    pub fn including(&self, segment: &str) -> Result<f64> {
        Ok(self.entry(segment)?.cumulative)
    }

    /// Running sum up to but excluding `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SegmentNotFound`] if the stack has no such segment.
    pub fn excluding(&self, segment: &str) -> Result<f64> {
        let entry = self.entry(segment)?;
        Ok(entry.cumulative - entry.increment)
    }
}

/// The three cumulative tables of one render.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildTables {
    /// Radial stack.
    pub radial: CumulativeTable,
    /// Stack above the midplane.
    pub upper: CumulativeTable,
    /// Stack below the midplane.
    pub lower: CumulativeTable,
}

impl BuildTables {
    /// Returns the table of `category`.
    #[must_use]
    pub fn get(&self, category: BuildCategory) -> &CumulativeTable {
        match category {
            BuildCategory::Radial => &self.radial,
            BuildCategory::VerticalUpper => &self.upper,
            BuildCategory::VerticalLower => &self.lower,
        }
    }

    /// Centre and half-width of the D spanning from the inboard face
    /// `inboard` to the outboard face `outboard` (both cumulative radial
    /// segments, inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SegmentNotFound`] if either segment is unknown.
    pub fn radial_span(&self, outboard: &str, inboard: &str) -> Result<(f64, f64)> {
        let outer = self.radial.including(outboard)?;
        let inner = self.radial.including(inboard)?;
        Ok(((outer + inner) / 2.0, (outer - inner) / 2.0))
    }
}
