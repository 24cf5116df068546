//! External tool availability check.

use console::style;

use crate::cli::icons::{dim_arrow, error, success};
use crate::config::Config;
use crate::extract::TextExtractor;

/// Print which extraction tools are on PATH.
pub fn cmd_tools(config: &Config) -> anyhow::Result<()> {
    let extractor = TextExtractor::from_config(&config.tools);

    println!("{}", style("Extraction tools").bold());
    for (tool, available) in extractor.check_tools() {
        if available {
            println!("  {} {}", success(), tool);
        } else {
            println!("  {} {} {}", error(), tool, style("(not found)").dim());
        }
    }
    println!(
        "  {} .txt and .docx files need no external tools",
        dim_arrow()
    );

    Ok(())
}
