//! Calendar month used for monthly summaries
//!
//! Transactions carry a UTC timestamp. Which month a transaction belongs to
//! depends on the calendar it is read in, so bucketing always goes through a
//! `CalendarZone`.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar used to read the year and month of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarZone {
    /// The machine's local time zone
    #[default]
    Local,
    Utc,
}

impl CalendarZone {
    /// Calendar year and month (1-12) of a timestamp in this zone
    pub fn year_month(&self, timestamp: &DateTime<Utc>) -> (i32, u32) {
        match self {
            Self::Local => {
                let local = timestamp.with_timezone(&Local);
                (local.year(), local.month())
            }
            Self::Utc => (timestamp.year(), timestamp.month()),
        }
    }

    /// Calendar date of a timestamp in this zone
    pub fn date(&self, timestamp: &DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => timestamp.with_timezone(&Local).date_naive(),
            Self::Utc => timestamp.date_naive(),
        }
    }
}

impl fmt::Display for CalendarZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
        }
    }
}

/// A calendar month (e.g., "2025-03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month, returning `None` when `month` is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing "now" in the given calendar
    pub fn current(zone: CalendarZone) -> Self {
        let (year, month) = zone.year_month(&Utc::now());
        Self { year, month }
    }

    /// Parse a month from "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError(s.to_string()))?;

        let year: i32 = year.parse().map_err(|_| MonthParseError(s.to_string()))?;
        let month: u32 = month.parse().map_err(|_| MonthParseError(s.to_string()))?;

        Self::new(year, month).ok_or_else(|| MonthParseError(s.to_string()))
    }

    /// Check if a timestamp falls in this month in the given calendar
    pub fn contains(&self, timestamp: &DateTime<Utc>, zone: CalendarZone) -> bool {
        zone.year_month(timestamp) == (self.year, self.month)
    }

    /// Human-readable name, e.g. "March 2025"
    pub fn long_name(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned for malformed month strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}'. Use YYYY-MM (e.g., 2025-03)", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2025-03").unwrap(), Month { year: 2025, month: 3 });
        assert_eq!(Month::parse(" 2024-12 ").unwrap(), Month { year: 2024, month: 12 });
        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("2025-00").is_err());
        assert!(Month::parse("March").is_err());
    }

    #[test]
    fn test_display() {
        let m = Month::new(2025, 3).unwrap();
        assert_eq!(m.to_string(), "2025-03");
        assert_eq!(m.long_name(), "March 2025");
    }

    #[test]
    fn test_contains_utc() {
        let march = Month::new(2025, 3).unwrap();
        let first = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let last = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();
        let april = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        let prior_year = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();

        assert!(march.contains(&first, CalendarZone::Utc));
        assert!(march.contains(&last, CalendarZone::Utc));
        assert!(!march.contains(&april, CalendarZone::Utc));
        assert!(!march.contains(&prior_year, CalendarZone::Utc));
    }

    #[test]
    fn test_contains_local_mid_month() {
        // Mid-month is inside the same month in every time zone
        let march = Month::new(2025, 3).unwrap();
        let mid = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        assert!(march.contains(&mid, CalendarZone::Local));
    }

    #[test]
    fn test_zone_serde() {
        assert_eq!(serde_json::to_string(&CalendarZone::Utc).unwrap(), "\"utc\"");
        let zone: CalendarZone = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(zone, CalendarZone::Local);
    }
}
