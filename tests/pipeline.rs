//! End-to-end pipeline tests
//!
//! Drives classification, extraction and analysis through the library API
//! on files written to a temporary directory.

use std::io::{Cursor, Write};
use std::path::Path;

use textlens::extract::ExtractionMethod;
use textlens::{analyze, DocumentKind, DocumentService, ProcessError, TextExtractor};
use zip::write::SimpleFileOptions;

fn service() -> DocumentService {
    DocumentService::new(TextExtractor::new())
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();
    std::fs::write(path, bytes).unwrap();
}

#[tokio::test]
async fn test_text_file_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("essay.TXT");
    std::fs::write(
        &path,
        "Rust is fast. Rust is safe! Is Rust fun? Rust rust RUST.\nTrailing words",
    )
    .unwrap();

    let report = service().process(&path).await.unwrap();
    assert_eq!(report.kind, DocumentKind::Text);
    assert_eq!(report.stats.total_sentences, 4);
    assert_eq!(report.stats.total_words, 14);
    assert_eq!(report.stats.top_words[0].word, "rust");
    assert_eq!(report.stats.top_words[0].count, 6);
    assert_eq!(report.stats.top_words[1].word, "is");
    assert_eq!(report.stats.top_words[1].count, 3);
}

#[tokio::test]
async fn test_docx_matches_plain_text_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    let paragraphs = ["The quarterly report is ready.", "Review the report by Friday!"];
    write_docx(&path, &paragraphs);

    let report = service().process(&path).await.unwrap();
    assert_eq!(report.kind, DocumentKind::Word);
    assert_eq!(report.method, ExtractionMethod::DocxXml);
    assert_eq!(report.stats, analyze(&paragraphs.join("\n")));
    assert_eq!(report.stats.total_sentences, 2);
    assert_eq!(report.stats.top_words[0].word, "report");
    assert_eq!(report.stats.top_words[0].count, 2);
}

#[tokio::test]
async fn test_docx_without_text_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.docx");
    write_docx(&path, &[]);

    let err = service().process(&path).await.unwrap_err();
    assert!(matches!(err, ProcessError::EmptyInput(_)));
}

#[tokio::test]
async fn test_corrupt_docx_is_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let err = service().process(&path).await.unwrap_err();
    assert!(matches!(err, ProcessError::Extraction(_)));
}

#[tokio::test]
async fn test_unsupported_format_message() {
    let err = service()
        .process(Path::new("photo.jpeg"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessError::UnsupportedFormat(_)));
    assert!(err.to_string().contains(".jpeg"));
}

#[tokio::test]
async fn test_files_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    let empty = dir.path().join("empty.txt");
    std::fs::write(&good, "One sentence here.").unwrap();
    std::fs::write(&empty, "").unwrap();

    let service = service();
    assert!(service.process(&empty).await.is_err());
    let report = service.process(&good).await.unwrap();
    assert_eq!(report.stats.total_words, 3);
    assert_eq!(report.stats.total_sentences, 1);
}
