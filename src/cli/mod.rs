pub mod check;
pub mod scan;
pub mod translate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A3S Cron Explain - Recognize cron expressions and describe them in Japanese
#[derive(Debug, Parser)]
#[command(name = "cron-explain", version, about)]
pub struct Cli {
    /// Config file to use instead of $A3S_CRON_HOME/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe a cron expression, optionally wrapped in cron(...)
    Translate {
        /// Expression words; joined with single spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Validate a cron expression and report its dialect
    Check {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Find and describe cron expressions in files or stdin
    Scan {
        /// Files to scan; reads stdin when none are given
        files: Vec<PathBuf>,
    },
}
