//! textlens - document text statistics.
//!
//! Extracts the text of a plain text, PDF, or Word document and reports
//! word count, sentence count, average word length and the most frequent
//! non-stop-words.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod extract;
pub mod services;

pub use analysis::{analyze, AnalysisResult, WordFrequency};
pub use extract::{DocumentKind, ExtractionError, TextExtractor};
pub use services::{DocumentService, FileReport, ProcessError};
