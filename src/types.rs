//! Core value types shared across the recognizer and translators

use serde::{Deserialize, Serialize};

/// Syntactic shape of a single cron field.
///
/// Compound kinds nest simpler ones: a `List` may hold ranges, a
/// `CompoundList` holds `N#k` or `NL` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `*`
    Wildcard,
    /// `?`
    Any,
    /// `15`
    Number,
    /// `9-17`
    Range,
    /// `1,15` or `8-10,14-16`
    List,
    /// `*/5` or `10/15`
    Step,
    /// `MON`, `JAN`
    Name,
    /// `MON-FRI`
    NameRange,
    /// `MON,WED,FRI`
    NameList,
    /// `1#2`
    NthWeekday,
    /// `5L`
    LastWeekday,
    /// bare `L`
    LastDayOfMonth,
    /// `15W`
    NearestWeekday,
    /// `1#1,3#1` or `1L,5L`
    CompoundList,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::Wildcard => "wildcard",
            FieldKind::Any => "any",
            FieldKind::Number => "number",
            FieldKind::Range => "range",
            FieldKind::List => "list",
            FieldKind::Step => "step",
            FieldKind::Name => "name",
            FieldKind::NameRange => "name_range",
            FieldKind::NameList => "name_list",
            FieldKind::NthWeekday => "nth_weekday",
            FieldKind::LastWeekday => "last_weekday",
            FieldKind::LastDayOfMonth => "last_day_of_month",
            FieldKind::NearestWeekday => "nearest_weekday",
            FieldKind::CompoundList => "compound_list",
        };
        write!(f, "{}", name)
    }
}

/// Field layout of a cron expression, decided by token count and, for six
/// fields, by the dialect heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `minute hour day month weekday`
    Standard,
    /// `second minute hour day month weekday`
    Seconds,
    /// AWS EventBridge: `minute hour day month weekday year`
    AwsWithYear,
    /// `second minute hour day month weekday year`
    SecondsWithYear,
}

impl Dialect {
    /// Number of fields this dialect expects
    pub fn field_count(&self) -> usize {
        match self {
            Dialect::Standard => 5,
            Dialect::Seconds | Dialect::AwsWithYear => 6,
            Dialect::SecondsWithYear => 7,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Standard => write!(f, "standard"),
            Dialect::Seconds => write!(f, "seconds"),
            Dialect::AwsWithYear => write!(f, "aws"),
            Dialect::SecondsWithYear => write!(f, "seconds+year"),
        }
    }
}

/// Result of unwrapping an optional `cron(...)` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Original text, shown to the user
    pub display: String,
    /// Text that gets validated and translated
    pub expression: String,
    /// Whether a `cron(...)` wrapper was removed
    pub is_parentheses: bool,
}

impl Extraction {
    /// An extraction that leaves `text` untouched
    pub fn passthrough(text: &str) -> Self {
        Self {
            display: text.to_string(),
            expression: text.to_string(),
            is_parentheses: false,
        }
    }
}

/// A validated expression together with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// Text as the user wrote it, wrapper included
    pub display: String,
    /// Unwrapped expression
    pub expression: String,
    /// Resolved field layout
    pub dialect: Dialect,
    /// Natural-language description
    pub translation: String,
}
