//! Read-only access to the scalar outputs of a simulation run.

mod scan_table;

pub use scan_table::ScanTable;

use std::fmt;

use crate::error::Result;

/// Selects one sweep variant of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scan {
    /// The final scan of the run.
    #[default]
    Last,
    /// A 1-based scan index.
    Index(usize),
}

impl Scan {
    /// Decodes the integer convention used by run files: `-1` (or any
    /// non-positive value) selects the last scan, `n >= 1` selects scan `n`.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        usize::try_from(raw)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Self::Last, Self::Index)
    }
}

impl fmt::Display for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Last => f.write_str("last"),
            Self::Index(n) => write!(f, "{n}"),
        }
    }
}

/// Name + scan lookup of run output values.
pub trait ValueResolver {
    /// Returns the value of `name` at `scan`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingVariable`](crate::error::BuildError::MissingVariable)
    /// if `name` is absent, or `ScanOutOfRange` if the scan does not exist.
    fn get(&self, name: &str, scan: Scan) -> Result<f64>;

    /// Returns whether the run output contains `name`.
    fn exists(&self, name: &str) -> bool;

    /// Returns the value of `name`, or `default` when the variable is absent.
    ///
    /// # Errors
    ///
    /// Propagates every error except a missing variable.
    fn get_or(&self, name: &str, scan: Scan, default: f64) -> Result<f64> {
        match self.get(name, scan) {
            Err(e) if e.is_missing_variable() => Ok(default),
            other => other,
        }
    }

    /// Returns an integer flag, or `default` when the flag is absent.
    ///
    /// # Errors
    ///
    /// Propagates every error except a missing variable.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn flag_or(&self, name: &str, scan: Scan, default: i64) -> Result<i64> {
        let value = self.get_or(name, scan, default as f64)?;
        Ok(value.round() as i64)
    }
}

impl<R: ValueResolver + ?Sized> ValueResolver for &R {
    fn get(&self, name: &str, scan: Scan) -> Result<f64> {
        (**self).get(name, scan)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }
}
