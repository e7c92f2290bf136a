pub mod assembly;
pub mod build;
pub mod config;
pub mod error;
pub mod flags;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod resolver;

#[cfg(test)]
mod fixtures;

pub use assembly::{Component, CrossSectionAssembler, RenderReport};
pub use config::RenderConfig;
pub use error::{Result, SectionError};
pub use resolver::{Scan, ScanTable, ValueResolver};
