//! PDF text extraction through Poppler's command line tools.

use std::path::Path;
use std::process::Command;

use super::{handle_cmd_output, ExtractionError, ExtractionMethod, ExtractionResult, TextExtractor};

impl TextExtractor {
    /// Extract text from a PDF file, one page at a time when the page count is known.
    pub(super) fn extract_pdf(&self, file_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let page_count = self.get_pdf_page_count(file_path);

        let text = match page_count {
            Some(pages) if pages > 1 => {
                let mut page_texts = Vec::with_capacity(pages as usize);
                for page in 1..=pages {
                    page_texts.push(self.run_pdftotext(file_path, Some(page))?);
                }
                page_texts.join("\n")
            }
            _ => self.run_pdftotext(file_path, None)?,
        };

        tracing::debug!(
            "pdftotext extracted {} chars from {} ({} pages)",
            text.len(),
            file_path.display(),
            page_count.map_or_else(|| "?".to_string(), |p| p.to_string())
        );

        Ok(ExtractionResult {
            text,
            method: ExtractionMethod::PdfToText,
            page_count,
        })
    }

    /// Run pdftotext on a whole PDF, or on a single page.
    fn run_pdftotext(&self, file_path: &Path, page: Option<u32>) -> Result<String, ExtractionError> {
        let mut cmd = Command::new(&self.tools.pdftotext);
        cmd.args(["-enc", "UTF-8"]);

        let error_prefix = match page {
            Some(p) => {
                let page_str = p.to_string();
                cmd.args(["-f", &page_str, "-l", &page_str]);
                format!("pdftotext failed on page {}", p)
            }
            None => "pdftotext failed".to_string(),
        };

        let output = cmd.arg(file_path).arg("-").output();

        handle_cmd_output(
            output,
            &format!("{} (install poppler-utils)", self.tools.pdftotext),
            &error_prefix,
        )
    }

    /// Get the page count of a PDF via pdfinfo.
    pub fn get_pdf_page_count(&self, file_path: &Path) -> Option<u32> {
        let output = Command::new(&self.tools.pdfinfo)
            .arg(file_path)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        parse_page_count(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Read the `Pages:` line of pdfinfo output.
fn parse_page_count(pdfinfo_output: &str) -> Option<u32> {
    pdfinfo_output
        .lines()
        .find(|line| line.starts_with("Pages:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse().ok())
}
