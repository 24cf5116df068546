//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod analyze;
mod config_cmd;
mod tools;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_config, LoadOptions};

#[derive(Parser)]
#[command(name = "textlens")]
#[command(about = "Analyze a text file, PDF, or Word document and generate a summary report")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true, env = "TEXTLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from documents and report word statistics
    Analyze {
        /// Files to analyze (.txt, .pdf, .doc, .docx)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which external extraction tools are available
    Tools,

    /// Print the effective configuration
    Config,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let config = load_config(&options).await?;

    match cli.command {
        Commands::Analyze { files, json } => {
            analyze::cmd_analyze(&config, &files, json || config.output.json).await
        }
        Commands::Tools => tools::cmd_tools(&config),
        Commands::Config => config_cmd::cmd_config_show(&config),
    }
}
