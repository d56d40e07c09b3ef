//! Day, month and weekday composition into one "when" clause

use crate::fields::{translate_month, translate_weekday};

const EVERY_DAY: &str = "毎日";

fn is_unset(field: &str) -> bool {
    field == "*" || field == "?"
}

fn month_fragment(month: &str) -> Option<String> {
    if month == "*" {
        return None;
    }
    let phrase = match month.strip_prefix("*/") {
        Some(interval) => format!("{}ヶ月ごと", interval),
        None => translate_month(month),
    };
    Some(phrase).filter(|p| !p.is_empty())
}

fn day_fragment(day: &str) -> Option<String> {
    if is_unset(day) {
        return None;
    }
    let phrase = if day == "L" {
        "月末".to_string()
    } else if let Some(interval) = day.strip_prefix("*/") {
        format!("{}日ごと", interval)
    } else if let Some(day_number) = day.strip_suffix('W') {
        format!("{}日に最も近い平日", day_number)
    } else {
        format!("{}日", day)
    };
    Some(phrase)
}

fn weekday_fragment(weekday: &str) -> Option<String> {
    if is_unset(weekday) {
        return None;
    }
    Some(translate_weekday(weekday)).filter(|p| !p.is_empty())
}

/// Combine the day-of-month, month and day-of-week fields.
///
/// Returns an empty string when nothing constrains the date, except that
/// an all-wildcard combination reads as `毎日`.
///
/// ```
/// use a3s_cron_explain::translate_schedule;
///
/// assert_eq!(translate_schedule("15", "6", "*"), "6月の15日");
/// assert_eq!(translate_schedule("15", "*", "MON"), "月曜日（毎月15日）");
/// assert_eq!(translate_schedule("?", "*", "?"), "毎日");
/// ```
pub fn translate_schedule(day: &str, month: &str, weekday: &str) -> String {
    if is_unset(day) && is_unset(month) && is_unset(weekday) {
        return EVERY_DAY.to_string();
    }

    let month_phrase = month_fragment(month);
    let day_phrase = day_fragment(day);

    let schedule = match (month_phrase, day_phrase) {
        (Some(m), Some(d)) => Some(format!("{}の{}", m, d)),
        (None, Some(d)) => Some(format!("毎月{}", d)),
        (Some(m), None) => Some(m),
        (None, None) => None,
    };

    match (weekday_fragment(weekday), schedule) {
        (Some(w), Some(s)) => format!("{}（{}）", w, s),
        (Some(w), None) => w,
        (None, Some(s)) => s,
        (None, None) => String::new(),
    }
}
