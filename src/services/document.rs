//! Document processing pipeline: classify, extract, check, analyze.
//!
//! Extraction runs on the blocking pool and is awaited to completion before
//! the analysis starts. Each call is independent of every other.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::{analyze, AnalysisResult};
use crate::extract::{DocumentKind, ExtractionError, ExtractionMethod, TextExtractor};

/// Errors that abort processing of a single document.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("The file appears to be empty: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Unsupported file type: {0}. Please use a .txt, .pdf, .doc, or .docx file")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Extraction(ExtractionError),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<ExtractionError> for ProcessError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(ext) => Self::UnsupportedFormat(ext),
            other => Self::Extraction(other),
        }
    }
}

/// Everything known about one processed document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub method: ExtractionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Characters of extracted text.
    pub text_length: usize,
    pub stats: AnalysisResult,
}

/// Runs the extract-then-analyze pipeline for single documents.
#[derive(Clone)]
pub struct DocumentService {
    extractor: Arc<TextExtractor>,
}

impl DocumentService {
    pub fn new(extractor: TextExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }

    /// Process one document end to end.
    pub async fn process(&self, path: &Path) -> Result<FileReport, ProcessError> {
        let kind = DocumentKind::from_path(path)?;
        tracing::info!("Processing {} ({})", path.display(), kind);

        let extractor = Arc::clone(&self.extractor);
        let owned_path = path.to_path_buf();
        let extracted =
            tokio::task::spawn_blocking(move || extractor.extract_kind(&owned_path, kind))
                .await??;

        let text_length = extracted.text.chars().count();
        tracing::info!("Text extracted, length: {}", text_length);

        if extracted.text.trim().is_empty() {
            return Err(ProcessError::EmptyInput(path.to_path_buf()));
        }

        let stats = analyze(&extracted.text);
        tracing::debug!(
            "Analysis complete: {} words, {} sentences",
            stats.total_words,
            stats.total_sentences
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            kind,
            method: extracted.method,
            page_count: extracted.page_count,
            text_length,
            stats,
        })
    }
}
