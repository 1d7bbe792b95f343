//! Dates print as `DD/MM/YYYY`, times as `HH:MM:SS`.
//!
//! Inputs are whatever the record carries: RFC 3339 timestamps, ISO dates,
//! or text that is already formatted. Nothing here reads the clock.

use crate::{PLACEHOLDER, non_blank};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").ok())
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_timestamp(text)
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
}

/// `2025-07-28T10:15:00-03:00` and `2025-07-28` both become `28/07/2025`.
/// Unrecognized text is returned trimmed; a missing value is `N/I`.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(text) = non_blank(raw) else {
        return PLACEHOLDER.to_string();
    };
    match parse_date(text) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => text.to_string(),
    }
}

/// The time of day of a timestamp, or an `HH:MM[:SS]` value normalized to
/// seconds.
pub fn format_time(raw: Option<&str>) -> String {
    let Some(text) = non_blank(raw) else {
        return PLACEHOLDER.to_string();
    };
    let time = parse_timestamp(text).map(|dt| dt.time()).or_else(|| {
        NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .ok()
    });
    match time {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => text.to_string(),
    }
}

/// `DD/MM/YYYY HH:MM:SS` for timestamps, `DD/MM/YYYY` for plain dates.
pub fn format_date_time(raw: Option<&str>) -> String {
    let Some(text) = non_blank(raw) else {
        return PLACEHOLDER.to_string();
    };
    if let Some(dt) = parse_timestamp(text) {
        return dt.format("%d/%m/%Y %H:%M:%S").to_string();
    }
    format_date(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(format_date(Some("2025-07-28")), "28/07/2025");
        assert_eq!(format_date(Some("2025-07-28T10:15:00-03:00")), "28/07/2025");
        assert_eq!(format_date(Some("2025-07-28T23:59:59")), "28/07/2025");
        assert_eq!(format_date(Some("28/07/2025")), "28/07/2025");
        assert_eq!(format_date(Some(" ")), "N/I");
        assert_eq!(format_date(None), "N/I");
    }

    #[test]
    fn times() {
        assert_eq!(format_time(Some("2025-07-28T10:15:00-03:00")), "10:15:00");
        assert_eq!(format_time(Some("08:30")), "08:30:00");
        assert_eq!(format_time(Some("08:30:05")), "08:30:05");
        assert_eq!(format_time(None), "N/I");
    }

    #[test]
    fn date_times() {
        assert_eq!(
            format_date_time(Some("2025-07-28T10:15:00-03:00")),
            "28/07/2025 10:15:00"
        );
        assert_eq!(format_date_time(Some("2025-07-28")), "28/07/2025");
        assert_eq!(format_date_time(None), "N/I");
    }
}
