//! Dialect resolution and sentence assembly
//!
//! Token count selects the layout:
//!
//! ```text
//! 5 fields  minute hour day month weekday
//! 6 fields  second minute hour day month weekday       (seconds-prefixed)
//!        or minute hour day month weekday year         (AWS EventBridge)
//! 7 fields  second minute hour day month weekday year
//! ```
//!
//! Six-field input is ambiguous. It is read as AWS when the last field is a
//! four-digit year, when any field is `?`, or when the weekday field looks
//! AWS-specific and nothing looks like a seconds field. Everything else is
//! read as seconds-prefixed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::{halves, translate_time};
use crate::grammar::split_fields;
use crate::lexicon::INVALID_EXPRESSION;
use crate::schedule::translate_schedule;
use crate::types::Dialect;

/// Terminal marker every sentence ends with; the AWS year clause is
/// spliced in front of each occurrence.
const RUN_SUFFIX: &str = "に実行";

static FOUR_DIGIT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern must compile"));
static NAME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3}").expect("name pattern must compile"));
static NTH_WEEKDAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+#[0-9]+$").expect("nth weekday pattern must compile"));
static LAST_WEEKDAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+L$").expect("last weekday pattern must compile"));
static WILDCARD_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*/[0-9]+$").expect("step pattern must compile"));
static PLAIN_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern must compile"));

fn is_four_digit_year(field: &str) -> bool {
    FOUR_DIGIT_YEAR.is_match(field)
}

/// Weekday field uses names, `N#k` or `NL`, and the minute slot is not a
/// `*/N` step.
fn looks_like_aws(second: &str, fifth: &str) -> bool {
    let aws_weekday = NAME_PREFIX.is_match(fifth)
        || NTH_WEEKDAY.is_match(fifth)
        || LAST_WEEKDAY.is_match(fifth);
    aws_weekday && !WILDCARD_STEP.is_match(second)
}

/// First field is a plausible second (`0`..`59`, `*`, `*/N`), or the second
/// field is a `*/N` minute step.
fn looks_like_seconds(first: &str, second: &str) -> bool {
    let plausible_second = PLAIN_INTEGER.is_match(first)
        && first.parse::<u64>().map(|n| n <= 59).unwrap_or(false);
    plausible_second
        || first == "*"
        || WILDCARD_STEP.is_match(first)
        || WILDCARD_STEP.is_match(second)
}

/// Decide which six-field dialect `fields` is written in.
pub fn resolve_six_field(fields: [&str; 6]) -> Dialect {
    let [first, second, _, _, fifth, last] = fields;

    let dialect = if is_four_digit_year(last) || fields.contains(&"?") {
        Dialect::AwsWithYear
    } else if looks_like_aws(second, fifth) && !looks_like_seconds(first, second) {
        Dialect::AwsWithYear
    } else {
        Dialect::Seconds
    };

    tracing::debug!(?fields, %dialect, "resolved six-field cron dialect");
    dialect
}

/// Dialect for an already split expression, `None` for bad field counts.
pub fn resolve_dialect(fields: &[&str]) -> Option<Dialect> {
    match fields[..] {
        [_, _, _, _, _] => Some(Dialect::Standard),
        [a, b, c, d, e, f] => Some(resolve_six_field([a, b, c, d, e, f])),
        [_, _, _, _, _, _, _] => Some(Dialect::SecondsWithYear),
        _ => None,
    }
}

/// `minute hour day month weekday`
pub fn translate_standard(fields: [&str; 5]) -> String {
    let [minute, hour, day, month, weekday] = fields;
    let time = translate_time(minute, hour);
    let schedule = translate_schedule(day, month, weekday);

    if schedule.is_empty() {
        format!("{}{}", time, RUN_SUFFIX)
    } else {
        format!("{}の{}{}", schedule, time, RUN_SUFFIX)
    }
}

/// Resolve the six-field dialect and translate accordingly.
pub fn translate_six_field(fields: [&str; 6]) -> String {
    match resolve_six_field(fields) {
        Dialect::AwsWithYear => translate_aws(fields),
        _ => translate_with_seconds(fields),
    }
}

/// `minute hour day month weekday year`
pub fn translate_aws(fields: [&str; 6]) -> String {
    let [minute, hour, day, month, weekday, year] = fields;
    let base = translate_standard([minute, hour, day, month, weekday]);

    if year != "*" && is_four_digit_year(year) {
        return base.replace(RUN_SUFFIX, &format!("（{}年）{}", year, RUN_SUFFIX));
    }
    base
}

/// `second minute hour day month weekday`
pub fn translate_with_seconds(fields: [&str; 6]) -> String {
    let [second, minute, hour, day, month, weekday] = fields;
    let base = translate_standard([minute, hour, day, month, weekday]);

    if second == "*" || second == "0" {
        return base;
    }
    if second.contains('/') {
        let (start, interval) = halves(second, '/');
        let clause = if start == "*" {
            format!("{}秒ごと", interval)
        } else {
            format!("{}秒から{}秒ごと", start, interval)
        };
        return format!("{} {}", clause, base);
    }
    format!("{}秒 {}", second, base)
}

/// `second minute hour day month weekday year`
pub fn translate_with_year(fields: [&str; 7]) -> String {
    let [second, minute, hour, day, month, weekday, year] = fields;
    let base = translate_with_seconds([second, minute, hour, day, month, weekday]);

    if year == "*" {
        return base;
    }
    format!("{} {}年", base, year)
}

/// Translate already split fields; any count other than 5..=7 yields the
/// invalid-expression sentence.
pub fn translate_fields(fields: &[&str]) -> String {
    match fields[..] {
        [a, b, c, d, e] => translate_standard([a, b, c, d, e]),
        [a, b, c, d, e, f] => translate_six_field([a, b, c, d, e, f]),
        [a, b, c, d, e, f, g] => translate_with_year([a, b, c, d, e, f, g]),
        _ => INVALID_EXPRESSION.to_string(),
    }
}

/// Translate a cron expression into a Japanese sentence.
///
/// Does not validate tokens; call
/// [`is_cron_expression`](crate::is_cron_expression) first when the output
/// must be meaningful. Never panics.
///
/// ```
/// use a3s_cron_explain::translate_cron;
///
/// assert_eq!(translate_cron("0 0 * * *"), "毎日の0時00分に実行");
/// assert_eq!(translate_cron("30 15 10 * * *"), "30秒 毎日の10時15分に実行");
/// assert_eq!(translate_cron("0 0 * *"), "無効なCron式");
/// ```
pub fn translate_cron(expression: &str) -> String {
    translate_fields(&split_fields(expression))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard() {
        assert_eq!(translate_standard(["*", "*", "*", "*", "*"]), "毎日の毎分に実行");
        assert_eq!(translate_standard(["0", "0", "*", "*", "*"]), "毎日の0時00分に実行");
        assert_eq!(translate_standard(["*/5", "*", "*", "*", "*"]), "毎日の5分ごとに実行");
        assert_eq!(
            translate_standard(["0", "9", "*", "*", "MON-FRI"]),
            "月曜日から金曜日の9時00分に実行"
        );
        assert_eq!(translate_standard(["0", "0", "1", "*", "*"]), "毎月1日の0時00分に実行");
        assert_eq!(translate_standard(["0", "18", "L", "*", "?"]), "毎月月末の18時00分に実行");
        assert_eq!(
            translate_standard(["0", "9", "15W", "*", "?"]),
            "毎月15日に最も近い平日の9時00分に実行"
        );
        assert_eq!(translate_standard(["0", "10", "?", "*", "1#2"]), "第2月曜日の10時00分に実行");
    }

    #[test]
    fn test_standard_without_schedule() {
        // `?` counts as unset; all-unset date fields collapse to 毎日
        assert_eq!(translate_standard(["0", "9", "1", "?", "?"]), "毎月1日の9時00分に実行");
        assert_eq!(translate_standard(["0", "9", "?", "?", "*"]), "毎日の9時00分に実行");
    }

    #[test]
    fn test_six_field_aws_with_year() {
        assert_eq!(
            translate_six_field(["0", "9", "*", "*", "?", "2024"]),
            "毎日の9時00分（2024年）に実行"
        );
    }

    #[test]
    fn test_six_field_aws_wildcard_year() {
        assert_eq!(
            translate_six_field(["0", "9", "*", "*", "?", "*"]),
            "毎日の9時00分に実行"
        );
    }

    #[test]
    fn test_six_field_seconds() {
        assert_eq!(
            translate_six_field(["30", "0", "0", "*", "*", "*"]),
            "30秒 毎日の0時00分に実行"
        );
    }

    #[test]
    fn test_resolve_year_beats_everything() {
        assert_eq!(
            resolve_six_field(["*/5", "*/5", "*", "*", "*", "2030"]),
            Dialect::AwsWithYear
        );
    }

    #[test]
    fn test_resolve_question_mark_is_aws() {
        assert_eq!(
            resolve_six_field(["0", "0", "*", "*", "?", "*"]),
            Dialect::AwsWithYear
        );
        assert_eq!(
            resolve_six_field(["0", "10", "?", "*", "MON-FRI", "*"]),
            Dialect::AwsWithYear
        );
    }

    #[test]
    fn test_resolve_heuristics() {
        // AWS-looking weekday, first field not a plausible second
        assert_eq!(
            resolve_six_field(["0,30", "9", "*", "*", "MON", "*"]),
            Dialect::AwsWithYear
        );
        assert_eq!(
            resolve_six_field(["75", "9", "*", "*", "1#2", "*"]),
            Dialect::AwsWithYear
        );
        // both heuristics agree on seconds
        assert_eq!(
            resolve_six_field(["0", "9", "*", "*", "MON", "*"]),
            Dialect::Seconds
        );
        // minute slot is a */N step, so never AWS by heuristic
        assert_eq!(
            resolve_six_field(["0,30", "*/5", "*", "*", "5L", "*"]),
            Dialect::Seconds
        );
        // inconclusive defaults to seconds
        assert_eq!(
            resolve_six_field(["0,30", "9", "*", "*", "1", "*"]),
            Dialect::Seconds
        );
    }

    #[test]
    fn test_resolve_wildcard_first_field_is_a_second() {
        assert_eq!(
            resolve_six_field(["*", "9", "*", "*", "MON", "*"]),
            Dialect::Seconds
        );
        assert_eq!(
            resolve_six_field(["*/10", "9", "*", "*", "MON", "*"]),
            Dialect::Seconds
        );
    }

    #[test]
    fn test_resolve_huge_first_field_is_not_a_second() {
        assert_eq!(
            resolve_six_field(["99999999999999999999999", "9", "*", "*", "MON", "*"]),
            Dialect::AwsWithYear
        );
    }

    #[test]
    fn test_aws_heuristic_translation() {
        assert_eq!(
            translate_six_field(["0,30", "9", "*", "*", "MON", "*"]),
            "月曜日の9時00,30分に実行"
        );
        assert_eq!(
            translate_six_field(["0,30", "9", "*", "*", "1", "*"]),
            "0,30秒 1月の毎時9分に実行"
        );
    }

    #[test]
    fn test_aws_year_clause() {
        assert_eq!(
            translate_aws(["0", "9", "*", "*", "?", "2024"]),
            "毎日の9時00分（2024年）に実行"
        );
        assert_eq!(translate_aws(["0", "9", "*", "*", "?", "*"]), "毎日の9時00分に実行");
        // not a four-digit year: no clause
        assert_eq!(translate_aws(["0", "9", "*", "*", "?", "24"]), "毎日の9時00分に実行");
        assert_eq!(
            translate_aws(["0", "9", "*", "*", "?", "2024-2026"]),
            "毎日の9時00分に実行"
        );
    }

    #[test]
    fn test_aws_year_clause_every_occurrence() {
        // an echoed weekday token carrying the suffix gets the clause too
        assert_eq!(
            translate_aws(["0", "9", "*", "*", "に実行", "2024"]),
            "（2024年）に実行の9時00分（2024年）に実行"
        );
    }

    #[test]
    fn test_seconds_clause() {
        assert_eq!(
            translate_with_seconds(["0", "0", "0", "*", "*", "*"]),
            "毎日の0時00分に実行"
        );
        assert_eq!(
            translate_with_seconds(["*", "0", "0", "*", "*", "*"]),
            "毎日の0時00分に実行"
        );
        assert_eq!(
            translate_with_seconds(["30", "0", "0", "*", "*", "*"]),
            "30秒 毎日の0時00分に実行"
        );
        assert_eq!(
            translate_with_seconds(["*/30", "0", "0", "*", "*", "*"]),
            "30秒ごと 毎日の0時00分に実行"
        );
        assert_eq!(
            translate_with_seconds(["10/30", "0", "0", "*", "*", "*"]),
            "10秒から30秒ごと 毎日の0時00分に実行"
        );
    }

    #[test]
    fn test_year_suffix() {
        assert_eq!(
            translate_with_year(["0", "0", "0", "*", "*", "*", "2024"]),
            "毎日の0時00分に実行 2024年"
        );
        assert_eq!(
            translate_with_year(["0", "0", "0", "*", "*", "*", "*"]),
            "毎日の0時00分に実行"
        );
        assert_eq!(
            translate_with_year(["0", "0", "0", "*", "*", "*", "2024-2025"]),
            "毎日の0時00分に実行 2024-2025年"
        );
    }

    #[test]
    fn test_resolve_dialect_by_count() {
        assert_eq!(resolve_dialect(&["0", "0", "*", "*", "*"]), Some(Dialect::Standard));
        assert_eq!(
            resolve_dialect(&["0", "0", "0", "*", "*", "*", "*"]),
            Some(Dialect::SecondsWithYear)
        );
        assert_eq!(resolve_dialect(&["0", "0", "*", "*"]), None);
        assert_eq!(resolve_dialect(&[]), None);
    }

    #[test]
    fn test_invalid_field_counts() {
        assert_eq!(translate_cron("0 0 * *"), "無効なCron式");
        assert_eq!(translate_cron("0 0 0 * * * * 2024"), "無効なCron式");
        assert_eq!(translate_cron(""), "無効なCron式");
    }

    #[test]
    fn test_translation_is_total_on_garbage() {
        for input in ["a b c d e", "/ / / / / /", "- - - - - - -", "# , L W ? * /"] {
            assert!(!translate_cron(input).is_empty(), "input {:?}", input);
        }
    }
}
