use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use core::mem::replace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical date format used for every lookup: "YYYY-MM-DD"
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Compact date format: "YYYYMMDD"
pub const COMPACT_FORMAT: &str = "%Y%m%d";

/// Date-only formats tried after the canonical, compact and slash forms.
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%b %d, %Y", "%d %b %Y"];

/// Date-time formats tried after the date-only ones. Only the date part is kept.
const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%d %H%M",
];

/// Years accepted by the fallback formats, exclusive on both ends.
const FALLBACK_YEAR_BOUNDS: (i32, i32) = (1900, 2100);

/// Returned when a string is not a valid canonical date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid canonical date: {0:?}")]
pub struct InvalidDate(pub String);

/// A calendar-valid date whose textual form is always zero-padded `YYYY-MM-DD`.
///
/// Ordering follows the calendar, which matches the lexical order of the
/// canonical text.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Build from numeric parts, rejecting dates that do not exist (e.g. Feb 30).
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<CanonicalDate> {
        NaiveDate::from_ymd_opt(year, month, day).map(CanonicalDate)
    }

    /// Normalize a raw CSV date cell.
    ///
    /// Accepted, in priority order:
    /// 1. `YYYY-MM-DD`
    /// 2. `YYYYMMDD`
    /// 3. `MM/DD/YYYY` or `YYYY/MM/DD` (one or two digit month/day)
    /// 4. a fixed list of fallback formats, years 1901 through 2099 only
    ///
    /// An input that has the shape of 1-3 but names a non-existent day is
    /// rejected outright; it never reaches the fallback list.
    pub fn normalize(raw: &str) -> Option<CanonicalDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if has_canonical_shape(raw) {
            return Self::from_parts(&raw[0..4], &raw[5..7], &raw[8..10]);
        }
        if raw.len() == 8 && is_digits(raw) {
            return Self::from_parts(&raw[0..4], &raw[4..6], &raw[6..8]);
        }
        if raw.contains('/') {
            let parts: Vec<&str> = raw.split('/').collect();
            if parts.len() == 3 {
                return Self::from_slash_parts(&parts);
            }
        }
        Self::from_fallback_formats(raw)
    }

    /// Convert to a NaiveDate.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Short axis label: "MM-DD".
    pub fn month_day_label(&self) -> String {
        self.0.format("%m-%d").to_string()
    }

    fn from_parts(year: &str, month: &str, day: &str) -> Option<CanonicalDate> {
        if !(is_digits(year) && is_digits(month) && is_digits(day)) {
            return None;
        }
        let year = year.parse::<i32>().ok()?;
        let month = month.parse::<u32>().ok()?;
        let day = day.parse::<u32>().ok()?;
        Self::from_ymd_opt(year, month, day)
    }

    fn from_slash_parts(parts: &[&str]) -> Option<CanonicalDate> {
        match parts {
            [month, day, year] if year.len() == 4 && month.len() <= 2 && day.len() <= 2 => {
                Self::from_parts(year, month, day)
            }
            [year, month, day] if year.len() == 4 && month.len() <= 2 && day.len() <= 2 => {
                Self::from_parts(year, month, day)
            }
            _ => None,
        }
    }

    fn from_fallback_formats(raw: &str) -> Option<CanonicalDate> {
        let parsed = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| {
                FALLBACK_DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            })
            .or_else(|| {
                FALLBACK_DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                    .map(|dt| dt.date())
            })?;
        let (lower, upper) = FALLBACK_YEAR_BOUNDS;
        if parsed.year() > lower && parsed.year() < upper {
            Some(CanonicalDate(parsed))
        } else {
            None
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn has_canonical_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

/// Strict parse: only the canonical `YYYY-MM-DD` shape is accepted.
impl FromStr for CanonicalDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_canonical_shape(s) {
            return Err(InvalidDate(s.to_string()));
        }
        Self::from_parts(&s[0..4], &s[5..7], &s[8..10]).ok_or_else(|| InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(value: NaiveDate) -> Self {
        CanonicalDate(value)
    }
}

impl From<CanonicalDate> for NaiveDate {
    fn from(value: CanonicalDate) -> Self {
        value.0
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An iterator over a range of CanonicalDates, inclusive on both ends.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct CanonicalDateRange(pub CanonicalDate, pub CanonicalDate);

impl Iterator for CanonicalDateRange {
    type Item = CanonicalDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 .0.checked_add_signed(TimeDelta::days(1))?;
            Some(replace(&mut self.0, CanonicalDate(next)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Option<String> {
        CanonicalDate::normalize(raw).map(|d| d.to_string())
    }

    #[test]
    fn test_supported_formats_normalize_to_canonical() {
        assert_eq!(norm("2024-03-05").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("20240305").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("03/05/2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("2024/03/05").as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        for raw in ["2000-02-29", "1999-12-31", "2024-01-01", "2099-07-15"] {
            assert_eq!(norm(raw).as_deref(), Some(raw));
        }
    }

    #[test]
    fn test_single_digit_slash_parts_are_padded() {
        assert_eq!(norm("3/5/2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("2024/3/5").as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn test_invalid_calendar_dates_are_rejected() {
        assert_eq!(norm("2023-02-30"), None);
        assert_eq!(norm("20230230"), None);
        assert_eq!(norm("02/30/2023"), None);
        assert_eq!(norm("2023-13-01"), None);
        assert_eq!(norm("2023-00-10"), None);
    }

    #[test]
    fn test_ambiguous_slash_dates_are_rejected() {
        assert_eq!(norm("05/03/24"), None);
        assert_eq!(norm("2024/003/05"), None);
        assert_eq!(norm("aa/bb/2024"), None);
    }

    #[test]
    fn test_fallback_formats() {
        assert_eq!(norm("2024-3-5").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("2024.03.05").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("Mar 5, 2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("5 Mar 2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("2024-03-05T10:15:00").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("2024-03-05 23:59").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("20240305 0000").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("2024-03-05T23:30:00+09:00").as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn test_fallback_year_bounds() {
        assert_eq!(norm("1900-1-1"), None);
        assert_eq!(norm("2100-1-1"), None);
        assert_eq!(norm("1901-1-1").as_deref(), Some("1901-01-01"));
        // Bounds only apply to the fallback path.
        assert_eq!(norm("1850-06-01").as_deref(), Some("1850-06-01"));
    }

    #[test]
    fn test_two_digit_era_years_on_strict_path() {
        assert_eq!(norm("0000-01-01").as_deref(), Some("0000-01-01"));
        assert_eq!(norm("00990615").as_deref(), Some("0099-06-15"));
        assert_eq!(norm("0050-1-1"), None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
        assert_eq!(norm("yesterday"), None);
        assert_eq!(norm("2024/03"), None);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert!("2024-03-05".parse::<CanonicalDate>().is_ok());
        assert!("20240305".parse::<CanonicalDate>().is_err());
        assert!("2024-3-5".parse::<CanonicalDate>().is_err());
        assert!("2023-02-30".parse::<CanonicalDate>().is_err());
    }

    #[test]
    fn test_ordering_matches_text() {
        let a: CanonicalDate = "2023-12-31".parse().unwrap();
        let b: CanonicalDate = "2024-01-01".parse().unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_month_day_label() {
        let d: CanonicalDate = "2024-03-05".parse().unwrap();
        assert_eq!(d.month_day_label(), "03-05");
    }

    #[test]
    fn test_serializes_as_canonical_string() {
        let d: CanonicalDate = "2024-03-05".parse().unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-03-05\"");
        let back: CanonicalDate = serde_json::from_str("\"2024-03-05\"").unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_date_range_iteration() {
        let start = CanonicalDate::from_ymd_opt(2024, 2, 27).unwrap();
        let end = CanonicalDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dates: Vec<String> = CanonicalDateRange(start, end).map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_date_range_empty() {
        let start = CanonicalDate::from_ymd_opt(2022, 3, 15).unwrap();
        let end = CanonicalDate::from_ymd_opt(2022, 3, 14).unwrap();
        assert_eq!(CanonicalDateRange(start, end).count(), 0);
    }
}
