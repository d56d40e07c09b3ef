//! Field grammar and expression validation
//!
//! Every token of a candidate expression is checked against an ordered list
//! of named syntax rules. A token is valid when any rule accepts it; an
//! expression is valid when it has 5 to 7 tokens and all of them are valid.
//!
//! Validation is syntax-only and field-agnostic: `L`, `W`, `#` and names
//! are accepted in any position, and values are never range-checked.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CronError, Result};
use crate::types::FieldKind;

/// Smallest and largest accepted token counts
pub const MIN_FIELDS: usize = 5;
pub const MAX_FIELDS: usize = 7;

/// A named syntax rule for one cron token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub kind: FieldKind,
}

/// Rules in evaluation order. When classifying, the first match wins.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        name: "wildcard",
        pattern: r"^\*$",
        kind: FieldKind::Wildcard,
    },
    FieldRule {
        name: "any",
        pattern: r"^\?$",
        kind: FieldKind::Any,
    },
    FieldRule {
        name: "number",
        pattern: r"^[0-9]+$",
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "range",
        pattern: r"^[0-9]+-[0-9]+$",
        kind: FieldKind::Range,
    },
    FieldRule {
        name: "list",
        pattern: r"^[0-9]+(-[0-9]+)?(,[0-9]+(-[0-9]+)?)+$",
        kind: FieldKind::List,
    },
    FieldRule {
        name: "wildcard_step",
        pattern: r"^\*/[0-9]+$",
        kind: FieldKind::Step,
    },
    FieldRule {
        name: "numeric_step",
        pattern: r"^[0-9]+/[0-9]+$",
        kind: FieldKind::Step,
    },
    FieldRule {
        name: "name",
        pattern: r"^[A-Za-z]{3}$",
        kind: FieldKind::Name,
    },
    FieldRule {
        name: "name_range",
        pattern: r"^[A-Za-z]{3}-[A-Za-z]{3}$",
        kind: FieldKind::NameRange,
    },
    FieldRule {
        name: "name_list",
        pattern: r"^[A-Za-z]{3}([,-][A-Za-z]{3})+$",
        kind: FieldKind::NameList,
    },
    FieldRule {
        name: "last_weekday",
        pattern: r"^[0-9]+L$",
        kind: FieldKind::LastWeekday,
    },
    FieldRule {
        name: "nearest_weekday",
        pattern: r"^[0-9]+L?W$",
        kind: FieldKind::NearestWeekday,
    },
    FieldRule {
        name: "last_day_of_month",
        pattern: r"^L$",
        kind: FieldKind::LastDayOfMonth,
    },
    FieldRule {
        name: "nth_weekday",
        pattern: r"^[0-9]+#[0-9]+$",
        kind: FieldKind::NthWeekday,
    },
    FieldRule {
        name: "nth_weekday_list",
        pattern: r"^[0-9]+#[0-9]+(,[0-9]+#[0-9]+)+$",
        kind: FieldKind::CompoundList,
    },
    FieldRule {
        name: "last_weekday_list",
        pattern: r"^[0-9]+L(,[0-9]+L)+$",
        kind: FieldKind::CompoundList,
    },
];

static COMPILED_RULES: Lazy<Vec<(&'static FieldRule, Regex)>> = Lazy::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern).expect("field rule pattern must compile");
            (rule, regex)
        })
        .collect()
});

/// Split on whitespace runs, ignoring leading and trailing whitespace.
pub fn split_fields(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// First rule accepting `token`, if any.
pub fn matching_rule(token: &str) -> Option<&'static FieldRule> {
    COMPILED_RULES
        .iter()
        .find(|(_, regex)| regex.is_match(token))
        .map(|(rule, _)| *rule)
}

/// Syntactic kind of a single token, or `None` if no rule accepts it.
///
/// ```
/// use a3s_cron_explain::{classify_field, FieldKind};
///
/// assert_eq!(classify_field("*/5"), Some(FieldKind::Step));
/// assert_eq!(classify_field("MON-FRI"), Some(FieldKind::NameRange));
/// assert_eq!(classify_field("1#2"), Some(FieldKind::NthWeekday));
/// assert_eq!(classify_field("hello"), None);
/// ```
pub fn classify_field(token: &str) -> Option<FieldKind> {
    matching_rule(token).map(|rule| rule.kind)
}

/// Whether any rule accepts `token`.
pub fn is_valid_field(token: &str) -> bool {
    matching_rule(token).is_some()
}

/// Check every token, reporting the field count or the first bad token.
pub fn validate_fields(fields: &[&str]) -> Result<()> {
    if !(MIN_FIELDS..=MAX_FIELDS).contains(&fields.len()) {
        return Err(CronError::FieldCount(fields.len()));
    }

    for (i, token) in fields.iter().enumerate() {
        if !is_valid_field(token) {
            tracing::trace!(token = *token, position = i + 1, "rejected cron field");
            return Err(CronError::InvalidField {
                position: i + 1,
                token: token.to_string(),
            });
        }
    }

    Ok(())
}

/// Whether `text` is a syntactically valid 5, 6 or 7 field cron expression.
///
/// ```
/// use a3s_cron_explain::is_cron_expression;
///
/// assert!(is_cron_expression("0 9 * * MON-FRI"));
/// assert!(is_cron_expression("0 0 * * ? 2024"));
/// assert!(!is_cron_expression("0 0 * *"));
/// assert!(!is_cron_expression("hello world foo bar baz"));
/// ```
pub fn is_cron_expression(text: &str) -> bool {
    validate_fields(&split_fields(text)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(COMPILED_RULES.len(), FIELD_RULES.len());
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = FIELD_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELD_RULES.len());
    }

    #[test]
    fn test_classify_basic_kinds() {
        assert_eq!(classify_field("*"), Some(FieldKind::Wildcard));
        assert_eq!(classify_field("?"), Some(FieldKind::Any));
        assert_eq!(classify_field("15"), Some(FieldKind::Number));
        assert_eq!(classify_field("9-17"), Some(FieldKind::Range));
        assert_eq!(classify_field("1,15"), Some(FieldKind::List));
        assert_eq!(classify_field("8-10,14-16"), Some(FieldKind::List));
        assert_eq!(classify_field("*/5"), Some(FieldKind::Step));
        assert_eq!(classify_field("10/15"), Some(FieldKind::Step));
    }

    #[test]
    fn test_classify_names() {
        assert_eq!(classify_field("MON"), Some(FieldKind::Name));
        assert_eq!(classify_field("jan"), Some(FieldKind::Name));
        assert_eq!(classify_field("MON-FRI"), Some(FieldKind::NameRange));
        assert_eq!(classify_field("MON,WED,FRI"), Some(FieldKind::NameList));
        assert_eq!(classify_field("sat,sun"), Some(FieldKind::NameList));
    }

    #[test]
    fn test_classify_special_day_tokens() {
        assert_eq!(classify_field("L"), Some(FieldKind::LastDayOfMonth));
        assert_eq!(classify_field("5L"), Some(FieldKind::LastWeekday));
        assert_eq!(classify_field("15W"), Some(FieldKind::NearestWeekday));
        assert_eq!(classify_field("15LW"), Some(FieldKind::NearestWeekday));
        assert_eq!(classify_field("1#2"), Some(FieldKind::NthWeekday));
        assert_eq!(classify_field("1#1,3#1"), Some(FieldKind::CompoundList));
        assert_eq!(classify_field("1L,5L"), Some(FieldKind::CompoundList));
    }

    #[test]
    fn test_classify_rejects() {
        for token in ["", "hello", "*/", "1-", "-5", "MONDAY", "l", "5w", "1#", "1,", "**", "1/2/3"] {
            assert_eq!(classify_field(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_valid_five_field() {
        assert!(is_cron_expression("0 0 * * *"));
        assert!(is_cron_expression("* * * * *"));
        assert!(is_cron_expression("30 9 * * *"));
    }

    #[test]
    fn test_valid_intervals() {
        assert!(is_cron_expression("*/5 * * * *"));
        assert!(is_cron_expression("0 */2 * * *"));
        assert!(is_cron_expression("10/15 * * * *"));
    }

    #[test]
    fn test_valid_ranges_and_lists() {
        assert!(is_cron_expression("0 9-17 * * *"));
        assert!(is_cron_expression("0 0 * * 1-5"));
        assert!(is_cron_expression("0 9,14,18 * * *"));
        assert!(is_cron_expression("0,30 * * * *"));
    }

    #[test]
    fn test_valid_names() {
        assert!(is_cron_expression("0 9 * * MON"));
        assert!(is_cron_expression("0 9 * JAN *"));
        assert!(is_cron_expression("0 9 * * MON-FRI"));
    }

    #[test]
    fn test_valid_special_characters() {
        assert!(is_cron_expression("0 0 L * *"));
        assert!(is_cron_expression("0 0 15W * *"));
        assert!(is_cron_expression("0 0 * * 1#2"));
        assert!(is_cron_expression("0 0 ? * MON"));
        assert!(is_cron_expression("0 0 15 * ?"));
    }

    #[test]
    fn test_valid_six_and_seven_fields() {
        assert!(is_cron_expression("0 0 0 * * *"));
        assert!(is_cron_expression("0 0 * * ? 2024"));
        assert!(is_cron_expression("0 0 0 * * * 2024"));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert!(is_cron_expression("  0 0 * * *\n"));
        assert!(is_cron_expression("0\t0  *   * *"));
    }

    #[test]
    fn test_wrong_field_counts() {
        assert!(!is_cron_expression("0 0 * *"));
        assert!(!is_cron_expression("0 0"));
        assert!(!is_cron_expression("*"));
        assert!(!is_cron_expression(""));
        assert!(!is_cron_expression("0 0 0 * * * * 2024"));
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(!is_cron_expression("hello world foo bar baz"));
        assert!(!is_cron_expression("0 0 * * MONDAY"));
        assert!(!is_cron_expression("0 0 * * 1/2/3"));
    }

    #[test]
    fn test_validate_fields_reports_position() {
        match validate_fields(&["0", "0", "x!", "*", "*"]) {
            Err(CronError::InvalidField { position, token }) => {
                assert_eq!(position, 3);
                assert_eq!(token, "x!");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            validate_fields(&["0", "0"]),
            Err(CronError::FieldCount(2))
        ));
    }

    #[test]
    fn test_no_range_checking() {
        assert!(is_cron_expression("99 99 99 99 99"));
    }
}
