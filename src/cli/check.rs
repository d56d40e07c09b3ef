use serde::Serialize;

use crate::config::{ExplainConfig, OutputFormat};
use crate::error::Result;
use crate::parser::CronExpression;
use crate::types::Dialect;

/// Validation result for one expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub expression: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validate `text` without translating it.
pub fn check(text: &str) -> CheckOutcome {
    match CronExpression::parse(text) {
        Ok(expr) => CheckOutcome {
            expression: text.to_string(),
            valid: true,
            dialect: Some(expr.dialect()),
            error: None,
        },
        Err(e) => CheckOutcome {
            expression: text.to_string(),
            valid: false,
            dialect: None,
            error: Some(e.to_string()),
        },
    }
}

/// Execute the `check` command. Returns whether the expression is valid.
pub fn execute(words: &[String], config: &ExplainConfig) -> Result<bool> {
    let outcome = check(words.join(" ").trim());

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
        OutputFormat::Text => {
            println!("{}", summary(&outcome));
            if let Some(error) = &outcome.error {
                eprintln!("{}", error);
            }
        }
    }

    Ok(outcome.valid)
}

fn summary(outcome: &CheckOutcome) -> String {
    match outcome.dialect {
        Some(dialect) if outcome.valid => format!("valid ({})", dialect),
        _ => "invalid".to_string(),
    }
}
