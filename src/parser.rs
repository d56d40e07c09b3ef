//! Typed cron expression
//!
//! ```text
//! "cron(0 18 ? * MON-FRI 2024)"
//!   │ unwrap
//!   ▼
//! "0 18 ? * MON-FRI 2024" ── split ──▶ 6 tokens ── validate ──▶ resolve dialect
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dialect::{resolve_dialect, translate_fields};
use crate::error::{CronError, Result};
use crate::grammar::{split_fields, validate_fields};
use crate::types::{Dialect, Explanation};
use crate::wrapper::extract_cron_from_parentheses;

/// A validated cron expression with its resolved dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronExpression {
    /// Text as given, wrapper included
    source: String,
    /// Unwrapped expression
    expression: String,
    fields: Vec<String>,
    dialect: Dialect,
    is_parentheses: bool,
}

impl CronExpression {
    /// Parse and validate a cron expression, optionally wrapped in `cron(...)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cron_explain::{CronExpression, Dialect};
    ///
    /// let expr = CronExpression::parse("cron(0 18 ? * MON-FRI 2024)").unwrap();
    /// assert_eq!(expr.dialect(), Dialect::AwsWithYear);
    /// assert_eq!(expr.describe(), "月曜日から金曜日の18時00分（2024年）に実行");
    ///
    /// assert!(CronExpression::parse("0 0 * *").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let extraction = extract_cron_from_parentheses(text);
        let fields = split_fields(&extraction.expression);

        validate_fields(&fields)?;
        let dialect = resolve_dialect(&fields).ok_or(CronError::FieldCount(fields.len()))?;

        Ok(Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            source: extraction.display,
            expression: extraction.expression,
            dialect,
            is_parentheses: extraction.is_parentheses,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whitespace-separated tokens of the unwrapped expression
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Whether the source used `cron(...)` syntax
    pub fn is_parentheses(&self) -> bool {
        self.is_parentheses
    }

    /// Japanese description of the schedule
    pub fn describe(&self) -> String {
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        translate_fields(&fields)
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl From<&CronExpression> for Explanation {
    fn from(expr: &CronExpression) -> Self {
        Explanation {
            display: expr.source.clone(),
            expression: expr.expression.clone(),
            dialect: expr.dialect,
            translation: expr.describe(),
        }
    }
}

/// Explain a piece of user-selected text.
///
/// Leading and trailing whitespace is ignored. Anything that does not
/// validate is reported as [`CronError::NotCron`] carrying the trimmed text.
///
/// ```
/// use a3s_cron_explain::explain;
///
/// let explanation = explain("  0 0 * * *\n").unwrap();
/// assert_eq!(explanation.translation, "毎日の0時00分に実行");
///
/// let err = explain("hello").unwrap_err();
/// assert_eq!(err.notice(), "選択されたテキストは有効なCron式ではありません");
/// ```
pub fn explain(text: &str) -> Result<Explanation> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CronError::EmptyInput);
    }

    match CronExpression::parse(text) {
        Ok(expr) => Ok(Explanation::from(&expr)),
        Err(CronError::FieldCount(_)) | Err(CronError::InvalidField { .. }) => {
            tracing::debug!(text, "selection is not a cron expression");
            Err(CronError::NotCron(text.to_string()))
        }
        Err(e) => Err(e),
    }
}
