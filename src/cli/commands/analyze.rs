//! Document analysis command.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::icons::error;
use crate::cli::report::{render_json, render_report};
use crate::config::Config;
use crate::extract::TextExtractor;
use crate::services::DocumentService;

/// Analyze each file in turn and print its report.
///
/// Files are independent: a failure is reported and the next file is processed.
pub async fn cmd_analyze(config: &Config, files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let service = DocumentService::new(TextExtractor::from_config(&config.tools));
    let spinner_style = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?;

    let mut reports = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for (i, path) in files.iter().enumerate() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style.clone());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Processing {}...", path.display()));

        let result = service.process(path).await;
        pb.finish_and_clear();

        match result {
            Ok(report) => {
                if json {
                    reports.push(report);
                } else {
                    if i > 0 {
                        println!();
                    }
                    print!("{}", render_report(&report));
                }
            }
            Err(e) => {
                tracing::error!("Error processing {}: {}", path.display(), e);
                eprintln!("{} {}: {}", error(), path.display(), e);
                failed += 1;
            }
        }
    }

    if json {
        println!("{}", render_json(&reports)?);
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be analyzed", failed, files.len());
    }

    Ok(())
}
