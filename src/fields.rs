//! Per-field phrase generators
//!
//! Each translator takes raw field text and returns a Japanese phrase
//! fragment. They are total: a shape without a dedicated phrase falls back
//! to the raw token.

use crate::lexicon::{lookup_month, lookup_weekday};

/// First two pieces of `s` split on `sep`. Missing pieces are empty and
/// anything after a second separator is ignored.
pub(crate) fn halves(s: &str, sep: char) -> (&str, &str) {
    let mut parts = s.split(sep);
    (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
}

/// Translate each comma-separated item and join with `と`.
fn join_items(field: &str, translate: fn(&str) -> String) -> String {
    field
        .split(',')
        .map(|item| translate(item.trim()))
        .collect::<Vec<_>>()
        .join("と")
}

/// Phrase for the hour field on its own.
pub fn translate_hour(hour: &str) -> String {
    if hour == "*" {
        return "毎時".to_string();
    }
    if hour.contains('/') {
        let (start, interval) = halves(hour, '/');
        if start == "*" {
            return format!("{}時間ごと", interval);
        }
        return format!("{}時から{}時間ごと", start, interval);
    }
    if hour.contains('-') {
        let (start, end) = halves(hour, '-');
        return format!("{}時〜{}時", start, end);
    }
    if hour.contains(',') {
        return hour
            .split(',')
            .map(|h| format!("{}時", h))
            .collect::<Vec<_>>()
            .join("と");
    }
    hour.to_string()
}

/// Phrase for the month field. Ranges are checked before lists, so a mixed
/// token like `1-3,5` is read as a range.
pub fn translate_month(month: &str) -> String {
    match month {
        "*" => return "毎月".to_string(),
        "?" => return String::new(),
        _ => {}
    }

    if month.contains('-') {
        let (start, end) = halves(month, '-');
        return format!("{}から{}", lookup_month(start), lookup_month(end));
    }
    if month.contains(',') {
        return join_items(month, translate_month);
    }
    if month.contains('/') {
        let (start, interval) = halves(month, '/');
        if start == "*" {
            return format!("{}ヶ月ごと", interval);
        }
        return format!("{}から{}ヶ月ごと", lookup_month(start), interval);
    }
    lookup_month(month).to_string()
}

/// Phrase for the day-of-week field, including `N#k` and `NL` forms.
pub fn translate_weekday(weekday: &str) -> String {
    match weekday {
        "*" => return "毎日".to_string(),
        "?" => return String::new(),
        _ => {}
    }

    if weekday.contains('-') {
        let (start, end) = halves(weekday, '-');
        return format!("{}から{}", lookup_weekday(start), lookup_weekday(end));
    }
    if weekday.contains(',') {
        return join_items(weekday, translate_weekday);
    }
    if weekday.contains('#') {
        let (day, occurrence) = halves(weekday, '#');
        return format!("第{}{}", occurrence, lookup_weekday(day));
    }
    if weekday.contains('L') {
        let day = weekday.replacen('L', "", 1);
        if day.is_empty() {
            return "最終日".to_string();
        }
        return format!("最終{}", lookup_weekday(&day));
    }
    lookup_weekday(weekday).to_string()
}

/// Joint minute + hour phrase. Branches are tried in order; the first
/// matching shape wins.
///
/// ```
/// use a3s_cron_explain::translate_time;
///
/// assert_eq!(translate_time("*/5", "9-17"), "9時から17時の間、5分ごと");
/// assert_eq!(translate_time("5", "14"), "14時05分");
/// ```
pub fn translate_time(minute: &str, hour: &str) -> String {
    if minute == "*" && hour == "*" {
        return "毎分".to_string();
    }
    if minute == "0" && hour == "*" {
        return "毎時0分".to_string();
    }
    if minute.contains('/') {
        return minute_interval(minute, hour);
    }
    if hour.starts_with("*/") {
        return hour_interval(minute, hour);
    }
    if minute == "*" {
        return format!("{}時台の毎分", translate_hour(hour));
    }
    if hour == "*" {
        return format!("毎時{}", minute_list(minute));
    }
    specific_time(minute, hour)
}

fn minute_interval(minute: &str, hour: &str) -> String {
    let (start, interval) = halves(minute, '/');
    let phrase = if start == "*" {
        format!("{}分ごと", interval)
    } else {
        format!("{}分から{}分ごと", start, interval)
    };

    if hour == "*" {
        return phrase;
    }
    if hour.contains('-') {
        let (start_hour, end_hour) = halves(hour, '-');
        return format!("{}時から{}時の間、{}", start_hour, end_hour, phrase);
    }
    format!("{} ({}時台)", phrase, translate_hour(hour))
}

fn hour_interval(minute: &str, hour: &str) -> String {
    let interval = &hour[2..];
    match minute {
        "0" => format!("{}時間ごと（各時間の0分）", interval),
        "*" => format!("{}時間ごとの毎分", interval),
        _ => format!("{}時間ごと（各時間の{}分）", interval, minute),
    }
}

/// `15,30` -> `15分、30分`; unpadded.
fn minute_list(minute: &str) -> String {
    minute
        .split(',')
        .map(|m| format!("{}分", m))
        .collect::<Vec<_>>()
        .join("、")
}

/// Zero-pad to width 2 per comma item; items are re-joined with a bare `,`.
fn pad_minute(minute: &str) -> String {
    minute
        .split(',')
        .map(|m| format!("{:0>2}", m))
        .collect::<Vec<_>>()
        .join(",")
}

/// Leading decimal integer of `s` without leading zeros.
fn leading_integer(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let digits = s[..end].trim_start_matches('0');
    Some(if digits.is_empty() { "0" } else { digits })
}

fn specific_time(minute: &str, hour: &str) -> String {
    if hour.contains(',') {
        let hours = hour
            .split(',')
            .map(|h| format!("{}時", h))
            .collect::<Vec<_>>()
            .join("、");
        return format!("{}の{}分", hours, pad_minute(minute));
    }
    if hour.contains('-') {
        let (start_hour, end_hour) = halves(hour, '-');
        if minute == "*" {
            return format!("{}時から{}時の毎分", start_hour, end_hour);
        }
        return format!("{}時から{}時の毎時{}", start_hour, end_hour, minute_list(minute));
    }
    let h = leading_integer(hour).unwrap_or(hour);
    format!("{}時{}分", h, pad_minute(minute))
}
