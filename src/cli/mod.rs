//! Command-line interface for textlens.

mod commands;
pub mod icons;
pub mod report;

pub use commands::{is_verbose, run};
