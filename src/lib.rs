//! # a3s-cron-explain
//!
//! Cron expression recognition and Japanese natural-language descriptions
//! for the A3S ecosystem.
//!
//! ## Overview
//!
//! `a3s-cron-explain` decides whether a piece of text is a cron expression
//! and, if it is, describes the schedule in Japanese. Standard 5-field
//! crontab, 6-field seconds-prefixed, 6-field AWS EventBridge and 7-field
//! seconds-plus-year layouts are understood, as is the `cron(...)` wrapper.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_explain::{explain, is_cron_expression, translate_cron};
//!
//! assert!(is_cron_expression("30 8 * * MON-FRI"));
//! assert_eq!(translate_cron("30 8 * * MON-FRI"), "月曜日から金曜日の8時30分に実行");
//!
//! let explanation = explain("cron(0 9 * * ? 2024)").unwrap();
//! assert_eq!(explanation.translation, "毎日の9時00分（2024年）に実行");
//! ```
//!
//! ## Architecture
//!
//! - **grammar**: ordered, named field rules; syntax-only validation
//! - **wrapper**: `cron(...)` unwrapping
//! - **lexicon**: month and weekday names
//! - **fields** / **schedule**: per-field phrases and the date clause
//! - **dialect**: field-count dispatch and the six-field heuristics
//! - **parser**: typed [`CronExpression`] and [`explain`]
//! - **scan**: finding and annotating expressions inside free text
//!
//! String-level functions never fail: validation returns `false` and
//! translation returns a sentinel sentence. The typed API reports the same
//! failures as [`CronError`].

pub mod cli;
pub mod config;
pub mod dialect;
pub mod dirs;
pub mod error;
pub mod fields;
pub mod grammar;
pub mod lexicon;
pub mod parser;
pub mod scan;
pub mod schedule;
pub mod types;
pub mod wrapper;

// Re-export core types
pub use config::{ExplainConfig, OutputFormat};
pub use dialect::{
    resolve_dialect, resolve_six_field, translate_aws, translate_cron, translate_standard,
    translate_with_seconds, translate_with_year,
};
pub use error::{CronError, Result};
pub use fields::{translate_hour, translate_month, translate_time, translate_weekday};
pub use grammar::{classify_field, is_cron_expression, is_valid_field, FieldRule, FIELD_RULES};
pub use lexicon::{
    lookup_month, lookup_weekday, Month, Weekday, INVALID_EXPRESSION, NOT_A_CRON_NOTICE,
};
pub use parser::{explain, CronExpression};
pub use scan::{
    annotate, annotate_with_report, candidate_regex, contains_candidate, find_candidates,
    render_inline, Annotation, Candidate, ScanReport, Segment,
};
pub use schedule::translate_schedule;
pub use types::{Dialect, Explanation, Extraction, FieldKind};
pub use wrapper::extract_cron_from_parentheses;
