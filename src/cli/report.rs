//! Report rendering for analysis results.

use crate::analysis::TOP_WORDS_LIMIT;
use crate::services::FileReport;

/// Render the human-readable report for one file.
pub fn render_report(report: &FileReport) -> String {
    let stats = &report.stats;
    let mut out = format!(
        "=== Text Analysis Report ===\n\
         File: {}\n\
         \n\
         Statistics:\n\
         Total Words: {}\n\
         Total Sentences: {}\n\
         Average Word Length: {:.2} characters\n\
         \n\
         Top {} Most Frequent Words (excluding stop words):\n",
        report.path.display(),
        format_number(stats.total_words),
        format_number(stats.total_sentences),
        stats.avg_word_length,
        TOP_WORDS_LIMIT
    );

    for entry in &stats.top_words {
        out.push_str(&format!(
            "- {}: {} occurrences\n",
            entry.word,
            format_number(entry.count)
        ));
    }

    out
}

/// Render reports as a pretty-printed JSON array.
pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();
    let chunks: Vec<_> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();
    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}
