//! Text extraction from documents.
//!
//! Documents are classified by file extension:
//! - `.txt` is read directly
//! - `.pdf` goes through pdftotext (Poppler)
//! - `.docx` is unpacked and its `word/document.xml` flattened to text
//! - `.doc` is handled as `.docx` when it is really a zip container,
//!   otherwise converted with antiword

mod pdf;
mod word;

use std::fmt;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::ToolsConfig;

pub use word::document_xml_to_text;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}. Please use a .txt, .pdf, .doc, or .docx file")]
    UnsupportedFormat(String),

    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Kind of document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Pdf,
    Word,
}

impl DocumentKind {
    /// Classify a file by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        Self::from_extension(&ext).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(if ext.is_empty() {
                "(no extension)".to_string()
            } else {
                format!(".{}", ext)
            })
        })
    }

    /// Map a lower-case extension (without dot) to a kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            "doc" | "docx" => Some(Self::Word),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Word => "word",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method used to extract text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// File read as text.
    PlainText,
    /// Poppler pdftotext.
    PdfToText,
    /// Paragraph text pulled from the OOXML body.
    DocxXml,
    /// antiword conversion of a binary .doc.
    Antiword,
}

/// Result of text extraction.
#[derive(Debug)]
pub struct ExtractionResult {
    /// Extracted text content.
    pub text: String,
    /// Method used for extraction.
    pub method: ExtractionMethod,
    /// Number of pages processed (for PDFs).
    pub page_count: Option<u32>,
}

/// Text extractor backed by file parsing and external tools.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    tools: ToolsConfig,
}

impl TextExtractor {
    /// Create an extractor using default tool names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from the tools section of the config.
    pub fn from_config(tools: &ToolsConfig) -> Self {
        Self {
            tools: tools.clone(),
        }
    }

    /// Extract text from a file, classifying it by extension.
    pub fn extract(&self, file_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let kind = DocumentKind::from_path(file_path)?;
        self.extract_kind(file_path, kind)
    }

    /// Extract text from a file of a known kind.
    pub fn extract_kind(
        &self,
        file_path: &Path,
        kind: DocumentKind,
    ) -> Result<ExtractionResult, ExtractionError> {
        tracing::debug!("Extracting {} as {}", file_path.display(), kind);
        match kind {
            DocumentKind::Text => self.extract_plain_text(file_path),
            DocumentKind::Pdf => self.extract_pdf(file_path),
            DocumentKind::Word => self.extract_word(file_path),
        }
    }

    fn extract_plain_text(&self, file_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let bytes = std::fs::read(file_path)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "{} is not valid UTF-8, decoding lossily",
                    file_path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(ExtractionResult {
            text,
            method: ExtractionMethod::PlainText,
            page_count: None,
        })
    }

    /// Check if the external tools are available.
    pub fn check_tools(&self) -> Vec<(String, bool)> {
        [
            &self.tools.pdftotext,
            &self.tools.pdfinfo,
            &self.tools.antiword,
        ]
        .iter()
        .map(|tool| (tool.to_string(), check_binary(tool)))
        .collect()
    }
}

/// Check if a binary is available in PATH (or is a path to an executable).
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Map a failed `Command` spawn to the matching extraction error.
fn spawn_error(e: std::io::Error, tool_name: &str) -> ExtractionError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ExtractionError::ToolNotFound(tool_name.to_string())
    } else {
        ExtractionError::Io(e)
    }
}

/// Handle command output, extracting stdout on success or returning appropriate error.
fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    let output = result.map_err(|e| spawn_error(e, tool_name))?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ExtractionError::Failed(format!(
            "{}: {}",
            error_prefix,
            stderr.trim()
        )))
    }
}
