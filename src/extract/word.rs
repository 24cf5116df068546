//! Word document extraction.
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`.
//! Paragraph text is the concatenation of its `<w:t>` runs, one line per
//! `<w:p>`. Legacy binary .doc files are converted with antiword.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::process::Command;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{handle_cmd_output, ExtractionError, ExtractionMethod, ExtractionResult, TextExtractor};

const DOCUMENT_XML: &str = "word/document.xml";

/// MIME types `infer` reports for zip-based Word files.
fn is_zip_mime(mime: &str) -> bool {
    matches!(
        mime,
        "application/zip"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    )
}

impl TextExtractor {
    /// Extract text from a .doc or .docx file.
    pub(super) fn extract_word(&self, file_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let is_docx = file_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("docx"));

        if is_docx || Self::sniff_zip(file_path)? {
            let file = File::open(file_path)?;
            let text = docx_text(file)?;
            return Ok(ExtractionResult {
                text,
                method: ExtractionMethod::DocxXml,
                page_count: None,
            });
        }

        tracing::debug!(
            "{} is a binary Word document, using {}",
            file_path.display(),
            self.tools.antiword
        );
        let output = Command::new(&self.tools.antiword).arg(file_path).output();
        let text = handle_cmd_output(output, &self.tools.antiword, "antiword failed")?;

        Ok(ExtractionResult {
            text,
            method: ExtractionMethod::Antiword,
            page_count: None,
        })
    }

    /// Detect a zip container from the file's leading bytes.
    fn sniff_zip(file_path: &Path) -> Result<bool, ExtractionError> {
        let detected = infer::get_from_path(file_path)?;
        Ok(detected.is_some_and(|t| is_zip_mime(t.mime_type())))
    }
}

/// Read the paragraph text of a .docx archive.
pub fn docx_text<R: Read + Seek>(reader: R) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(reader)?;

    let mut entry = archive.by_name(DOCUMENT_XML).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => {
            ExtractionError::Failed(format!("Error processing Word document: missing {}", DOCUMENT_XML))
        }
        other => ExtractionError::Zip(other),
    })?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    document_xml_to_text(&xml)
}

/// Flatten WordprocessingML body XML into plain text.
///
/// Alternate renderings under `mc:Fallback` are skipped so text boxes are
/// read once. A paragraph nested inside another (text box content) starts
/// on its own line.
pub fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::with_capacity(xml.len() / 4);

    let mut fallback_depth = 0usize;
    let mut tabs_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            ExtractionError::Failed(format!(
                "Error processing Word document: bad XML at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Fallback" => fallback_depth += 1,
                _ if fallback_depth > 0 => {}
                b"p" => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                b"t" => in_text = true,
                b"tabs" => tabs_depth += 1,
                _ => {}
            },
            Event::End(ref e) => match e.local_name().as_ref() {
                b"Fallback" => fallback_depth = fallback_depth.saturating_sub(1),
                _ if fallback_depth > 0 => {}
                b"p" => text.push('\n'),
                b"t" => in_text = false,
                b"tabs" => tabs_depth = tabs_depth.saturating_sub(1),
                _ => {}
            },
            Event::Empty(ref e) if fallback_depth == 0 => match e.local_name().as_ref() {
                b"tab" if tabs_depth == 0 => text.push('\t'),
                b"br" | b"cr" | b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(ref e) if in_text && fallback_depth == 0 => {
                let run = e.unescape().map_err(|e| {
                    ExtractionError::Failed(format!("Error processing Word document: {}", e))
                })?;
                text.push_str(&run);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim_end().to_string())
}
