//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::parse_entry_date;

/// Inclusive calendar date range used by list and history filters.
///
/// Either bound may be absent, producing a one-sided range. Bounds that fail
/// to parse as `YYYY-MM-DD` are treated as absent rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build a range from raw query parameters.
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(parse_entry_date),
            end: end.and_then(parse_entry_date),
        }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a date falls inside the range (bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_sided_range() {
        let range = DateRange::from_params(Some("2024-01-01"), Some("2024-01-31"));
        assert!(range.contains(d("2024-01-01")));
        assert!(range.contains(d("2024-01-31")));
        assert!(!range.contains(d("2024-02-01")));
        assert!(!range.contains(d("2023-12-31")));
    }

    #[test]
    fn test_one_sided_range() {
        let from_only = DateRange::from_params(Some("2024-06-01"), None);
        assert!(from_only.contains(d("2030-01-01")));
        assert!(!from_only.contains(d("2024-05-31")));

        let until_only = DateRange::from_params(None, Some("2024-06-01"));
        assert!(until_only.contains(d("2020-01-01")));
        assert!(!until_only.contains(d("2024-06-02")));
    }

    #[test]
    fn test_unparseable_bounds_are_dropped() {
        let range = DateRange::from_params(Some("01/02/2024"), Some("not-a-date"));
        assert!(range.is_unbounded());
    }
}
