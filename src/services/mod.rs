//! Service layer for textlens.
//!
//! Document processing lives here, separated from UI concerns so the CLI
//! and tests drive the same pipeline.

pub mod document;

pub use document::{DocumentService, FileReport, ProcessError};
