//! `cron(...)` wrapper handling
//!
//! AWS and several schedulers write expressions as `cron(0 9 * * ? *)`.
//! The wrapper is removed before validation; the original text is kept for
//! display.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Extraction;

const WRAPPER_PREFIX: &str = "cron";

static WRAPPER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cron\s*\(([^)]+)\)").expect("wrapper pattern must compile"));

/// Unwrap `cron( ... )` syntax.
///
/// Text that does not start with the literal `cron`, or that has no
/// parenthesized group, is passed through unchanged.
///
/// ```
/// use a3s_cron_explain::extract_cron_from_parentheses;
///
/// let e = extract_cron_from_parentheses("cron(0 9 * * ? *)");
/// assert_eq!(e.expression, "0 9 * * ? *");
/// assert_eq!(e.display, "cron(0 9 * * ? *)");
/// assert!(e.is_parentheses);
/// ```
pub fn extract_cron_from_parentheses(text: &str) -> Extraction {
    if !text.starts_with(WRAPPER_PREFIX) {
        return Extraction::passthrough(text);
    }

    match WRAPPER_PATTERN.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => Extraction {
            display: text.to_string(),
            expression: strip_quotes(inner.as_str().trim()).to_string(),
            is_parentheses: true,
        },
        None => Extraction::passthrough(text),
    }
}

/// Drop one leading and one trailing quote character, independently.
fn strip_quotes(s: &str) -> &str {
    const QUOTES: &[char] = &['\'', '"'];
    let s = s.strip_prefix(QUOTES).unwrap_or(s);
    s.strip_suffix(QUOTES).unwrap_or(s)
}
