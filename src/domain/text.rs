//! Display text: update dates, episode counts and width-aware truncation

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const INVALID_DATE: &str = "Invalid Date";

/// Parse an update timestamp: RFC 3339 first, then a bare `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Long en-US date, e.g. "January 5, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a raw timestamp attribute as a long date.
///
/// Empty input yields an empty string; unparseable input yields
/// [`INVALID_DATE`].
pub fn format_long_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    parse_date(raw)
        .map(long_date)
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

pub fn timestamp_attribute(updated: &DateTime<Utc>) -> String {
    updated.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn episodes_label(episodes: u32) -> String {
    format!("{episodes} episodes")
}

/// Cut `s` to at most `width` terminal columns, marking the cut with "…".
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
