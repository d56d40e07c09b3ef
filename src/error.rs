//! Error types for a3s-cron-explain

use thiserror::Error;

use crate::lexicon;

/// Errors reported by the typed expression API, configuration and CLI.
///
/// The string-level entry points (`is_cron_expression`, `translate_cron`)
/// never produce these; they degrade to `false` or a sentinel sentence.
#[derive(Debug, Error)]
pub enum CronError {
    /// Nothing but whitespace was given
    #[error("Empty input")]
    EmptyInput,

    /// Token count outside 5..=7
    #[error("Invalid cron expression: expected 5 to 7 fields, got {0}")]
    FieldCount(usize),

    /// A token matched no field rule
    #[error("Invalid cron expression: unrecognized field '{token}' at position {position}")]
    InvalidField { position: usize, token: String },

    /// Text offered for explanation is not a cron expression
    #[error("Not a valid cron expression: {0}")]
    NotCron(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl CronError {
    /// Localized message shown to a user whose selection was rejected.
    pub fn notice(&self) -> String {
        match self {
            Self::EmptyInput | Self::NotCron(_) => lexicon::NOT_A_CRON_NOTICE.to_string(),
            Self::FieldCount(_) | Self::InvalidField { .. } => {
                lexicon::INVALID_EXPRESSION.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for cron-explain operations
pub type Result<T> = std::result::Result<T, CronError>;
