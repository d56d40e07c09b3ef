//! Candidate scanning in free text
//!
//! The candidate pattern is looser than the field grammar: it finds things
//! that look like cron expressions, and each hit is then unwrapped and
//! validated before it is annotated. A bare expression must not run into
//! a following word, so `0 3 * * 0 /usr/bin/job` yields `0 3 * * 0`.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dialect::translate_cron;
use crate::grammar::is_cron_expression;
use crate::wrapper::extract_cron_from_parentheses;

const WRAPPED: &str = r"cron\s*\([^)]+\)";
const LOOSE_FIELD: &str = r"[0-9*?/,-]+";
const LOOSE_DAY: &str = r"[0-9*?/,LW-]+";
const LOOSE_WEEKDAY: &str = r"[0-9*?/,#L-]+";
const NAMES: &str = r"[A-Z]{3}(?:[,-][A-Z]{3})*";
/// Anything that cannot continue a token, or end of text.
const TERMINATOR: &str = r"(?:[^0-9A-Z*?/,#-]|$)";

static CANDIDATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let bare = format!(
        r"{f}\s+{f}\s+{d}\s+(?:{f}|{n})\s+(?:{w}|{n})(?:\s+{f})?(?:\s+{f})?",
        f = LOOSE_FIELD,
        d = LOOSE_DAY,
        w = LOOSE_WEEKDAY,
        n = NAMES,
    );
    Regex::new(&format!("(?i)({})|({}){}", WRAPPED, bare, TERMINATOR))
        .expect("candidate pattern must compile")
});

/// The composed, case-insensitive candidate pattern.
pub fn candidate_regex() -> &'static Regex {
    &CANDIDATE_PATTERN
}

/// Whether `text` contains anything that looks like a cron expression.
pub fn contains_candidate(text: &str) -> bool {
    CANDIDATE_PATTERN.is_match(text)
}

/// A pattern hit, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Byte range within the scanned text
    pub span: Range<usize>,
    pub text: String,
}

/// Every non-overlapping candidate, left to right.
pub fn find_candidates(text: &str) -> Vec<Candidate> {
    CANDIDATE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| Candidate {
            span: m.range(),
            text: m.as_str().to_string(),
        })
        .collect()
}

/// A validated expression found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub span: Range<usize>,
    /// Matched text, wrapper included
    pub display: String,
    pub expression: String,
    pub translation: String,
}

impl Annotation {
    fn from_candidate(candidate: Candidate) -> Option<Self> {
        let extraction = extract_cron_from_parentheses(&candidate.text);
        if !is_cron_expression(&extraction.expression) {
            tracing::trace!(text = %candidate.text, "candidate failed validation");
            return None;
        }

        Some(Self {
            span: candidate.span,
            translation: translate_cron(&extraction.expression),
            display: extraction.display,
            expression: extraction.expression,
        })
    }
}

/// A piece of scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Cron(Annotation),
}

impl Segment {
    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            Segment::Cron(annotation) => Some(annotation),
            Segment::Text { .. } => None,
        }
    }
}

/// Counts from one or more annotate passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Candidates that validated and were translated
    pub translated: usize,
    /// Candidates the validator turned down
    pub rejected: usize,
}

impl ScanReport {
    pub fn merge(&mut self, other: ScanReport) {
        self.translated += other.translated;
        self.rejected += other.rejected;
    }
}

/// Split `text` into plain text and annotated expressions, with counts.
///
/// Rejected candidates stay part of the surrounding text, and adjacent text
/// is never split into separate segments.
pub fn annotate_with_report(text: &str) -> (Vec<Segment>, ScanReport) {
    let mut segments = Vec::new();
    let mut report = ScanReport::default();
    let mut cursor = 0;

    for candidate in find_candidates(text) {
        let Some(annotation) = Annotation::from_candidate(candidate) else {
            report.rejected += 1;
            continue;
        };

        if annotation.span.start > cursor {
            segments.push(Segment::Text {
                text: text[cursor..annotation.span.start].to_string(),
            });
        }
        cursor = annotation.span.end;
        segments.push(Segment::Cron(annotation));
        report.translated += 1;
    }

    if cursor < text.len() {
        segments.push(Segment::Text {
            text: text[cursor..].to_string(),
        });
    }

    if report.translated + report.rejected > 0 {
        tracing::debug!(
            translated = report.translated,
            rejected = report.rejected,
            "scanned text for cron expressions"
        );
    }

    (segments, report)
}

/// Split `text` into plain text and annotated expressions.
///
/// ```
/// use a3s_cron_explain::{annotate, Segment};
///
/// let segments = annotate("run at 0 0 * * * daily");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(
///     segments[1].annotation().map(|a| a.translation.as_str()),
///     Some("毎日の0時00分に実行")
/// );
/// ```
pub fn annotate(text: &str) -> Vec<Segment> {
    annotate_with_report(text).0
}

/// Rejoin segments, writing each annotation as `display（translation）`.
pub fn render_inline(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text { text } => text.clone(),
            Segment::Cron(a) => format!("{}（{}）", a.display, a.translation),
        })
        .collect()
}
