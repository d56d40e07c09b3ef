use crate::config::{ExplainConfig, OutputFormat};
use crate::error::{CronError, Result};
use crate::parser::explain;
use crate::types::Explanation;

/// Execute the `translate` command. Returns `false` when the input is not a
/// cron expression.
pub fn execute(words: &[String], config: &ExplainConfig) -> Result<bool> {
    let text = words.join(" ");

    match explain(&text) {
        Ok(explanation) => {
            println!("{}", render(&explanation, config)?);
            Ok(true)
        }
        Err(e @ (CronError::NotCron(_) | CronError::EmptyInput)) => {
            tracing::info!(error = %e, "rejected input");
            eprintln!("{}", e.notice());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Format one explanation according to `config`.
pub fn render(explanation: &Explanation, config: &ExplainConfig) -> Result<String> {
    let output = match config.format {
        OutputFormat::Json => serde_json::to_string(explanation)?,
        OutputFormat::Text if config.show_original => format!(
            "Cron式: {}\n翻訳: {}",
            explanation.display, explanation.translation
        ),
        OutputFormat::Text => explanation.translation.clone(),
    };
    Ok(output)
}
