//! Month and weekday dictionaries, plus the fixed phrases the rest of the
//! crate shares.
//!
//! Keys are the numeric form (`"1"`..`"12"`, `"0"`..`"7"`) or the three-letter
//! English abbreviation. Lookup never fails: unknown keys come back as-is.

/// Sentence returned for an expression with the wrong number of fields.
pub const INVALID_EXPRESSION: &str = "無効なCron式";

/// Notice shown when user-selected text is not a cron expression.
pub const NOT_A_CRON_NOTICE: &str = "選択されたテキストは有効なCron式ではありません";

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Exact key match against `"1"`..`"12"` and `"JAN"`..`"DEC"`.
    pub fn from_key(key: &str) -> Option<Self> {
        let month = match key {
            "1" | "JAN" => Month::Jan,
            "2" | "FEB" => Month::Feb,
            "3" | "MAR" => Month::Mar,
            "4" | "APR" => Month::Apr,
            "5" | "MAY" => Month::May,
            "6" | "JUN" => Month::Jun,
            "7" | "JUL" => Month::Jul,
            "8" | "AUG" => Month::Aug,
            "9" | "SEP" => Month::Sep,
            "10" | "OCT" => Month::Oct,
            "11" | "NOV" => Month::Nov,
            "12" | "DEC" => Month::Dec,
            _ => return None,
        };
        Some(month)
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Month::Jan => "1月",
            Month::Feb => "2月",
            Month::Mar => "3月",
            Month::Apr => "4月",
            Month::May => "5月",
            Month::Jun => "6月",
            Month::Jul => "7月",
            Month::Aug => "8月",
            Month::Sep => "9月",
            Month::Oct => "10月",
            Month::Nov => "11月",
            Month::Dec => "12月",
        }
    }
}

/// Day of the week. Both `0` and `7` mean Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// Exact key match against `"0"`..`"7"` and `"SUN"`..`"SAT"`.
    pub fn from_key(key: &str) -> Option<Self> {
        let day = match key {
            "0" | "7" | "SUN" => Weekday::Sun,
            "1" | "MON" => Weekday::Mon,
            "2" | "TUE" => Weekday::Tue,
            "3" | "WED" => Weekday::Wed,
            "4" | "THU" => Weekday::Thu,
            "5" | "FRI" => Weekday::Fri,
            "6" | "SAT" => Weekday::Sat,
            _ => return None,
        };
        Some(day)
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Weekday::Sun => "日曜日",
            Weekday::Mon => "月曜日",
            Weekday::Tue => "火曜日",
            Weekday::Wed => "水曜日",
            Weekday::Thu => "木曜日",
            Weekday::Fri => "金曜日",
            Weekday::Sat => "土曜日",
        }
    }
}

/// Probe with the uppercased key, then the raw key, else echo `raw`.
fn lookup<'a, T>(
    raw: &'a str,
    from_key: fn(&str) -> Option<T>,
    phrase: fn(&T) -> &'static str,
) -> &'a str {
    from_key(&raw.to_uppercase())
        .or_else(|| from_key(raw))
        .map(|v| phrase(&v))
        .unwrap_or(raw)
}

/// Japanese month name for `raw`, or `raw` itself when unrecognized.
pub fn lookup_month(raw: &str) -> &str {
    lookup(raw, Month::from_key, Month::phrase)
}

/// Japanese weekday name for `raw`, or `raw` itself when unrecognized.
pub fn lookup_weekday(raw: &str) -> &str {
    lookup(raw, Weekday::from_key, Weekday::phrase)
}
