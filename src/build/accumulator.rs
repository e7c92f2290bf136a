use tracing::{debug, warn};

use crate::error::Result;
use crate::resolver::{Scan, ValueResolver};

use super::{
    AliasTable, BuildCategory, BuildTables, CumulativeEntry, CumulativeTable, SegmentSequence,
};

/// Cumulative build at a segment, with and without that segment's thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativePair {
    /// Position of the far face of the segment.
    pub including: f64,
    /// Position of the near face of the segment.
    pub excluding: f64,
}

/// Sums build thicknesses along a stacking order.
///
/// Thicknesses are fetched from the resolver on demand after alias
/// substitution. A segment whose value is missing from the run output
/// contributes nothing and is reported as a warning; a segment that is not
/// in the stacking order yields the total of the whole sequence.
#[derive(Debug)]
pub struct BuildAccumulator<'r, R: ?Sized> {
    resolver: &'r R,
    scan: Scan,
    aliases: AliasTable,
    radial: SegmentSequence,
    upper: SegmentSequence,
    lower: SegmentSequence,
    verbose: bool,
}

impl<R: ?Sized> Clone for BuildAccumulator<'_, R> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver,
            scan: self.scan,
            aliases: self.aliases.clone(),
            radial: self.radial,
            upper: self.upper,
            lower: self.lower,
            verbose: self.verbose,
        }
    }
}

impl<'r, R: ValueResolver + ?Sized> BuildAccumulator<'r, R> {
    /// Creates an accumulator over the standard stacking orders and aliases.
    #[must_use]
    pub fn new(resolver: &'r R, scan: Scan) -> Self {
        Self {
            resolver,
            scan,
            aliases: AliasTable::default(),
            radial: BuildCategory::Radial.standard_sequence(),
            upper: BuildCategory::VerticalUpper.standard_sequence(),
            lower: BuildCategory::VerticalLower.standard_sequence(),
            verbose: true,
        }
    }

    /// Replaces the alias rules.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Replaces the stacking order of the sequence's category.
    #[must_use]
    pub fn with_sequence(mut self, sequence: SegmentSequence) -> Self {
        match sequence.category() {
            BuildCategory::Radial => self.radial = sequence,
            BuildCategory::VerticalUpper => self.upper = sequence,
            BuildCategory::VerticalLower => self.lower = sequence,
        }
        self
    }

    /// Sets whether recovered lookups are reported at warning level.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the scan being read.
    #[must_use]
    pub fn scan(&self) -> Scan {
        self.scan
    }

    /// Returns the stacking order used for `category`.
    #[must_use]
    pub fn sequence(&self, category: BuildCategory) -> SegmentSequence {
        match category {
            BuildCategory::Radial => self.radial,
            BuildCategory::VerticalUpper => self.upper,
            BuildCategory::VerticalLower => self.lower,
        }
    }

    /// Returns the unsigned thickness of `segment`, or `None` if the run output
    /// has no value for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver fails for a reason other than a
    /// missing variable.
    pub fn thickness(&self, segment: &str) -> Result<Option<f64>> {
        let key = self.aliases.resolve(segment);
        match self.resolver.get(key, self.scan) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_missing_variable() => {
                if self.verbose {
                    warn!(segment, key, "build segment missing from run output, treated as zero");
                } else {
                    debug!(segment, key, "build segment missing from run output, treated as zero");
                }
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Cumulative build up to and including `segment`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver fails for a reason other than a
    /// missing variable.
    pub fn cumulative(&self, category: BuildCategory, segment: &str) -> Result<f64> {
        Ok(self.cumulative_pair(category, segment)?.including)
    }

    /// Cumulative build at `segment`, with and without its own thickness.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver fails for a reason other than a
    /// missing variable.
    pub fn cumulative_pair(
        &self,
        category: BuildCategory,
        segment: &str,
    ) -> Result<CumulativePair> {
        let sign = category.step_sign();
        let mut total = 0.0;
        let mut step = 0.0;
        for item in self.sequence(category).iter() {
            step = sign * self.thickness(item.name)?.unwrap_or(0.0);
            total += step;
            if item.name == segment {
                return Ok(CumulativePair {
                    including: total,
                    excluding: total - step,
                });
            }
        }

        if self.verbose {
            warn!(%category, segment, "build parameter not found, using full stack");
        } else {
            debug!(%category, segment, "build parameter not found, using full stack");
        }
        Ok(CumulativePair {
            including: total,
            excluding: total - step,
        })
    }

    /// Builds the cumulative table of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver fails for a reason other than a
    /// missing variable.
    pub fn table(&self, category: BuildCategory) -> Result<CumulativeTable> {
        let sign = category.step_sign();
        let mut total = 0.0;
        let mut entries = Vec::new();
        for item in self.sequence(category).iter() {
            let increment = sign * self.thickness(item.name)?.unwrap_or(0.0);
            total += increment;
            entries.push(CumulativeEntry {
                name: item.name,
                increment,
                cumulative: total,
            });
        }
        debug!(%category, total, "built cumulative table");
        Ok(CumulativeTable::new(category, entries))
    }

    /// Builds the radial, upper and lower tables for one render.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver fails for a reason other than a
    /// missing variable.
    pub fn tables(&self) -> Result<BuildTables> {
        Ok(BuildTables {
            radial: self.table(BuildCategory::Radial)?,
            upper: self.table(BuildCategory::VerticalUpper)?,
            lower: self.table(BuildCategory::VerticalLower)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{BuildError, SectionError};
    use crate::fixtures::reference_run;
    use crate::resolver::ScanTable;
    use approx::assert_abs_diff_eq;

    const FIVE: SegmentSequence =
        SegmentSequence::new(BuildCategory::Radial, &["s1", "s2", "s3", "s4", "s5"]);

    fn five_segments() -> ScanTable {
        ScanTable::new()
            .with("s1", 1.0)
            .with("s2", 2.0)
            .with("s3", 3.0)
            .with("s4", 4.0)
            .with("s5", 5.0)
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn last_segment_sums_everything() {
        let table = five_segments();
        let acc = BuildAccumulator::new(&table, Scan::Last).with_sequence(FIVE);
        assert_abs_diff_eq!(acc.cumulative(BuildCategory::Radial, "s5").unwrap(), 15.0);
    }

    #[test]
    fn pair_looks_back_one_segment() {
        let table = five_segments();
        let acc = BuildAccumulator::new(&table, Scan::Last).with_sequence(FIVE);
        let pair = acc.cumulative_pair(BuildCategory::Radial, "s3").unwrap();
        assert_abs_diff_eq!(pair.including, 6.0);
        assert_abs_diff_eq!(pair.excluding, 3.0);
    }

    #[test]
    fn missing_segment_keeps_partial_sum() {
        init_tracing();
        let mut table = five_segments();
        table.remove("s3");
        let acc = BuildAccumulator::new(&table, Scan::Last).with_sequence(FIVE);
        let total = acc.cumulative(BuildCategory::Radial, "s5").unwrap();
        assert_abs_diff_eq!(total, 1.0 + 2.0 + 4.0 + 5.0);
        assert!(acc.thickness("s3").unwrap().is_none());
    }

    #[test]
    fn unknown_segment_returns_full_total() {
        init_tracing();
        let table = five_segments();
        let acc = BuildAccumulator::new(&table, Scan::Last)
            .with_sequence(FIVE)
            .verbose(false);
        let pair = acc.cumulative_pair(BuildCategory::Radial, "nope").unwrap();
        assert_abs_diff_eq!(pair.including, 15.0);
        assert_abs_diff_eq!(pair.excluding, 10.0);
    }

    #[test]
    fn resolver_failures_other_than_missing_propagate() {
        let mut table = five_segments();
        table.insert_scans("s2", vec![2.0, 2.5]);
        let acc = BuildAccumulator::new(&table, Scan::Index(4)).with_sequence(FIVE);
        let err = acc.cumulative(BuildCategory::Radial, "s5").unwrap_err();
        assert!(matches!(
            err,
            SectionError::Build(BuildError::ScanOutOfRange { .. })
        ));
    }

    #[test]
    fn aliases_share_one_value() {
        let table = reference_run();
        let acc = BuildAccumulator::new(&table, Scan::Last);
        let inboard = acc.cumulative_pair(BuildCategory::Radial, "rminori").unwrap();
        let outboard = acc.cumulative_pair(BuildCategory::Radial, "rminoro").unwrap();
        assert_abs_diff_eq!(inboard.including - inboard.excluding, 2.9, epsilon = 1e-12);
        assert_abs_diff_eq!(outboard.including - outboard.excluding, 2.9, epsilon = 1e-12);
    }

    #[test]
    fn vertical_lower_goes_down() {
        let table = reference_run();
        let acc = BuildAccumulator::new(&table, Scan::Last);
        let lower = acc.table(BuildCategory::VerticalLower).unwrap();
        let mut previous = 0.0;
        for entry in lower.entries() {
            assert!(entry.cumulative <= 0.0);
            assert!(entry.cumulative <= previous);
            previous = entry.cumulative;
        }
    }

    #[test]
    fn radial_and_upper_go_up() {
        let table = reference_run();
        let acc = BuildAccumulator::new(&table, Scan::Last);
        for category in [BuildCategory::Radial, BuildCategory::VerticalUpper] {
            let built = acc.table(category).unwrap();
            let mut previous = 0.0;
            for entry in built.entries() {
                assert!(entry.cumulative >= previous);
                previous = entry.cumulative;
            }
        }
    }

    #[test]
    fn table_agrees_with_walk() {
        let table = reference_run();
        let acc = BuildAccumulator::new(&table, Scan::Last);
        let tables = acc.tables().unwrap();
        for name in ["gapds", "d_vv_out", "blnkoth", "tfthko"] {
            assert_abs_diff_eq!(
                tables.radial.including(name).unwrap(),
                acc.cumulative(BuildCategory::Radial, name).unwrap(),
                epsilon = 1e-12
            );
        }
        let pair = acc
            .cumulative_pair(BuildCategory::VerticalLower, "d_vv_bot")
            .unwrap();
        assert_abs_diff_eq!(
            tables.lower.excluding("d_vv_bot").unwrap(),
            pair.excluding,
            epsilon = 1e-12
        );
    }
}
