use crate::error::Result;
use crate::geometry::{ClosedCurve, Curve, DSection};

use super::D_SECTION_SAMPLES;

/// Fills the band between two nested D half-sections.
///
/// The outer boundary is walked forward and the inner one backward, so the
/// ring closes on the midplane where both halves start and end.
#[derive(Debug, Clone, Copy)]
pub struct MakeDRing {
    outer: DSection,
    inner: DSection,
    samples: usize,
}

impl MakeDRing {
    /// Creates a new `MakeDRing` operation.
    #[must_use]
    pub fn new(outer: DSection, inner: DSection) -> Self {
        Self {
            outer,
            inner,
            samples: D_SECTION_SAMPLES,
        }
    }

    /// Sets the number of samples per boundary.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Executes the operation, returning the closed ring.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampled boundaries do not form a polygon.
    pub fn execute(&self) -> Result<ClosedCurve> {
        ClosedCurve::stitch(
            &self.outer.sample(self.samples),
            &self.inner.sample(self.samples),
        )
    }
}
