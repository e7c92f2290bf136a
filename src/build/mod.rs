//! Radial and vertical build stack-up: ordered segments, aliases and
//! cumulative positions.

mod accumulator;
mod alias;
mod segment;
mod table;

pub use accumulator::{BuildAccumulator, CumulativePair};
pub use alias::{AliasRule, AliasTable};
pub use segment::{
    BuildCategory, BuildSegment, SegmentSequence, RADIAL_BUILD, VERTICAL_LOWER, VERTICAL_UPPER,
};
pub use table::{BuildTables, CumulativeEntry, CumulativeTable};
