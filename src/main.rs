use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_cron_explain::cli::{Cli, Commands};
use a3s_cron_explain::{ExplainConfig, OutputFormat};

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExplainConfig::load_from(path)?,
        None => ExplainConfig::load()?,
    };
    if cli.json {
        config.format = OutputFormat::Json;
    }

    let success = match &cli.command {
        Commands::Translate { expression } => {
            a3s_cron_explain::cli::translate::execute(expression, &config)?
        }
        Commands::Check { expression } => a3s_cron_explain::cli::check::execute(expression, &config)?,
        Commands::Scan { files } => a3s_cron_explain::cli::scan::execute(files, &config)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
