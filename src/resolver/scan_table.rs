use std::collections::HashMap;

use crate::error::{BuildError, Result};

use super::{Scan, ValueResolver};

/// An in-memory table of per-scan values keyed by variable name.
///
/// Every variable holds one value per scan. A variable given a single value
/// answers every scan with it, matching run files where constants are written
/// once.
#[derive(Debug, Clone, Default)]
pub struct ScanTable {
    values: HashMap<String, Vec<f64>>,
}

impl ScanTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable with one value per scan, replacing any previous entry.
    pub fn insert_scans(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.values.insert(name.into(), values);
    }

    /// Inserts a scan-independent variable.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.insert_scans(name, vec![value]);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Removes a variable, returning its scans.
    pub fn remove(&mut self, name: &str) -> Option<Vec<f64>> {
        self.values.remove(name)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the table holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ScanTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

impl ValueResolver for ScanTable {
    fn get(&self, name: &str, scan: Scan) -> Result<f64> {
        let scans = self
            .values
            .get(name)
            .filter(|scans| !scans.is_empty())
            .ok_or_else(|| BuildError::MissingVariable {
                name: name.to_owned(),
            })?;

        let value = match (scan, scans.len()) {
            (_, 1) => scans[0],
            (Scan::Last, n) => scans[n - 1],
            (Scan::Index(i), n) => {
                if i == 0 || i > n {
                    return Err(BuildError::ScanOutOfRange {
                        name: name.to_owned(),
                        scan: i,
                        available: n,
                    }
                    .into());
                }
                scans[i - 1]
            }
        };
        Ok(value)
    }

    fn exists(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SectionError;

    #[test]
    fn scan_decoding() {
        assert_eq!(Scan::from_raw(-1), Scan::Last);
        assert_eq!(Scan::from_raw(0), Scan::Last);
        assert_eq!(Scan::from_raw(3), Scan::Index(3));
    }

    #[test]
    fn scans_are_one_based() {
        let mut table = ScanTable::new();
        table.insert_scans("rmajor", vec![8.0, 8.5, 9.0]);
        assert!((table.get("rmajor", Scan::Index(1)).unwrap() - 8.0).abs() < f64::EPSILON);
        assert!((table.get("rmajor", Scan::Last).unwrap() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_value_answers_every_scan() {
        let table = ScanTable::new().with("bore", 2.0);
        assert!((table.get("bore", Scan::Index(7)).unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_variable_is_typed() {
        let table = ScanTable::new();
        let err = table.get("bore", Scan::Last).unwrap_err();
        assert!(err.is_missing_variable());
        assert!(!table.exists("bore"));
    }

    #[test]
    fn scan_out_of_range() {
        let mut table = ScanTable::new();
        table.insert_scans("rmajor", vec![8.0, 9.0]);
        let err = table.get("rmajor", Scan::Index(3)).unwrap_err();
        assert!(matches!(
            err,
            SectionError::Build(BuildError::ScanOutOfRange { available: 2, .. })
        ));
    }

    #[test]
    fn defaults_cover_only_missing() {
        let mut table = ScanTable::new().with("i_tf_sup", 0.0);
        table.insert_scans("broken", vec![1.0, 2.0]);
        assert_eq!(table.flag_or("i_tf_sup", Scan::Last, 1).unwrap(), 0);
        assert_eq!(table.flag_or("i_tf_shape", Scan::Last, 1).unwrap(), 1);
        assert!(table.get_or("broken", Scan::Index(5), 0.0).is_err());
    }

    #[test]
    fn collects_from_pairs() {
        let table: ScanTable = [("a".to_owned(), 1.0), ("b".to_owned(), 2.0)]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
