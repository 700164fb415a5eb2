//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod analyze;
mod config_cmd;
mod projects;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;

#[derive(Parser)]
#[command(name = "construct")]
#[command(about = "Construction site video analysis (simulated)")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
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
    /// Upload and analyze a site video, then print the report
    Analyze {
        /// Video file to analyze
        file: PathBuf,
        /// Print the snapshot as JSON instead of the report
        #[arg(long)]
        json: bool,
        /// Reject empty or non-video files before analysis
        #[arg(long)]
        strict: bool,
        /// Override the simulated processing delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the sample analysis report without waiting
    Sample {
        /// Print the snapshot as JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// List projects
    Projects {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show effective configuration
    Config,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut settings, config) = load_settings(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Analyze {
            file,
            json,
            strict,
            delay_ms,
        } => {
            if strict {
                settings.strict_input = true;
            }
            if let Some(delay) = delay_ms {
                settings.analysis_delay_ms = delay;
            }
            analyze::cmd_analyze(&settings, &file, json).await
        }
        Commands::Sample { json } => analyze::cmd_sample(json),
        Commands::Projects { json } => projects::cmd_projects(json).await,
        Commands::Config => config_cmd::cmd_config_show(&settings, &config),
    }
}
