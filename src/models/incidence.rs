//! Incidence models.
//!
//! An incidence is an absence recorded against one or more days, optionally
//! confined to a window of the working day. This module holds the raw
//! records as supplied by the user and the per-day entries they expand into.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::TimeWindow;

/// Character that starts a trailing comment in a time-window value.
pub const COMMENT_DELIMITER: char = '#';

/// An incidence time window as typed by the user, with any trailing
/// comment removed.
///
/// The comment is stripped once, when the value is built, so the stored
/// text is what every later reader sees.
///
/// # Example
///
/// ```
/// use jornada_register::models::TimeWindowSpec;
///
/// let spec = TimeWindowSpec::new("10:00-11:00 # Cita médica").unwrap();
/// assert_eq!(spec.as_str(), "10:00-11:00");
///
/// // Only a comment: no window at all.
/// assert!(TimeWindowSpec::new("# todo el día").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeWindowSpec(String);

impl TimeWindowSpec {
    /// Strips the comment and surrounding whitespace.
    ///
    /// Returns `None` when nothing is left, which callers treat as a
    /// whole-day absence.
    pub fn new(raw: &str) -> Option<Self> {
        let cleaned = raw
            .split_once(COMMENT_DELIMITER)
            .map_or(raw, |(value, _)| value)
            .trim();
        (!cleaned.is_empty()).then(|| Self(cleaned.to_string()))
    }

    /// Returns the cleaned window text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the cleaned text into a time window.
    pub fn parse(&self) -> EngineResult<TimeWindow> {
        self.0.parse()
    }
}

/// Highest day number a [`DayRange`] may name.
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// An inclusive range of days of the month.
///
/// Both ends must lie in `1..=31`. Days past the end of a shorter month are
/// accepted here and never match a working day.
///
/// # Example
///
/// ```
/// use jornada_register::models::DayRange;
///
/// let range: DayRange = "10-12".parse().unwrap();
/// assert_eq!(range.days().collect::<Vec<_>>(), vec![10, 11, 12]);
/// assert!("12-10".parse::<DayRange>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    /// First day (inclusive).
    pub first: u32,
    /// Last day (inclusive).
    pub last: u32,
}

impl DayRange {
    /// Returns the days covered by the range.
    pub fn days(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }
}

impl FromStr for DayRange {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidDayRange {
            range: s.to_string(),
        };
        let (first, last) = s.trim().split_once('-').ok_or_else(invalid)?;
        let first: u32 = first.trim().parse().map_err(|_| invalid())?;
        let last: u32 = last.trim().parse().map_err(|_| invalid())?;
        if first == 0 || first > last || last > MAX_DAY_OF_MONTH {
            return Err(invalid());
        }
        Ok(Self { first, last })
    }
}

/// An incidence as supplied in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceRecord {
    /// Text drawn in the incidence column (e.g., "Vacaciones").
    pub label: String,
    /// Day range text in `DD-DD` form, validated when the index is built.
    pub day_range: String,
    /// Optional window; `None` means the whole day.
    #[serde(default)]
    pub time_window: Option<TimeWindowSpec>,
}

impl IncidenceRecord {
    /// Creates a record, stripping any comment from the window text.
    pub fn new(label: impl Into<String>, day_range: impl Into<String>, window: Option<&str>) -> Self {
        Self {
            label: label.into(),
            day_range: day_range.into(),
            time_window: window.and_then(TimeWindowSpec::new),
        }
    }
}

/// An incidence applied to a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceEntry {
    /// The incidence label.
    pub label: String,
    /// Optional window; `None` means the whole day.
    pub time_window: Option<TimeWindowSpec>,
}

impl IncidenceEntry {
    /// Returns true if the entry covers the whole working day.
    pub fn is_whole_day(&self) -> bool {
        self.time_window.is_none()
    }
}

/// Incidence entries keyed by day of month, in the order they were supplied.
pub type DayIncidences = BTreeMap<u32, Vec<IncidenceEntry>>;

/// Joins the labels of a day's incidences in insertion order.
pub fn joined_labels(entries: &[IncidenceEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_spec_strips_comment() {
        let spec = TimeWindowSpec::new("10:00-11:00 # Cita").unwrap();
        assert_eq!(spec.as_str(), "10:00-11:00");
    }

    #[test]
    fn test_window_spec_without_comment_is_trimmed() {
        let spec = TimeWindowSpec::new("  09:00-17:00 ").unwrap();
        assert_eq!(spec.as_str(), "09:00-17:00");
    }

    #[test]
    fn test_window_spec_stripping_is_idempotent() {
        let once = TimeWindowSpec::new("10:00-11:00 # a # b").unwrap();
        let twice = TimeWindowSpec::new(once.as_str()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.as_str(), "10:00-11:00");
    }

    #[test]
    fn test_window_spec_comment_only_is_none() {
        assert!(TimeWindowSpec::new("#nada").is_none());
        assert!(TimeWindowSpec::new("   ").is_none());
    }

    #[test]
    fn test_window_spec_parse() {
        let spec = TimeWindowSpec::new("10:00-11:00#x").unwrap();
        let window = spec.parse().unwrap();
        assert_eq!(window.to_string(), "10:00-11:00");
    }

    #[test]
    fn test_window_spec_parse_malformed() {
        let spec = TimeWindowSpec::new("diez-once").unwrap();
        assert!(matches!(
            spec.parse(),
            Err(EngineError::InvalidTimeWindow { .. })
        ));
    }

    #[test]
    fn test_day_range_single_day() {
        let range: DayRange = "15-15".parse().unwrap();
        assert_eq!(range.days().count(), 1);
    }

    #[test]
    fn test_day_range_rejects_inverted() {
        match "20-10".parse::<DayRange>() {
            Err(EngineError::InvalidDayRange { range }) => assert_eq!(range, "20-10"),
            other => panic!("Expected InvalidDayRange, got {:?}", other),
        }
    }

    #[test]
    fn test_day_range_rejects_days_outside_month() {
        match "1-4000000000".parse::<DayRange>() {
            Err(EngineError::InvalidDayRange { range }) => assert_eq!(range, "1-4000000000"),
            other => panic!("Expected InvalidDayRange, got {:?}", other),
        }
        assert!(matches!(
            "0-3".parse::<DayRange>(),
            Err(EngineError::InvalidDayRange { .. })
        ));
        assert!(matches!(
            "30-32".parse::<DayRange>(),
            Err(EngineError::InvalidDayRange { .. })
        ));
    }

    #[test]
    fn test_day_range_accepts_full_month() {
        let range: DayRange = "1-31".parse().unwrap();
        assert_eq!(range.days().count(), 31);
    }

    #[test]
    fn test_day_range_rejects_non_numeric() {
        assert!("a-b".parse::<DayRange>().is_err());
        assert!("15".parse::<DayRange>().is_err());
        assert!("-3-5".parse::<DayRange>().is_err());
    }

    #[test]
    fn test_record_new_strips_comment() {
        let record = IncidenceRecord::new("Médico", "10-10", Some("10:00-11:00 # Cita"));
        assert_eq!(
            record.time_window.as_ref().map(TimeWindowSpec::as_str),
            Some("10:00-11:00")
        );
    }

    #[test]
    fn test_joined_labels_preserve_order() {
        let entries = vec![
            IncidenceEntry {
                label: "Médico".to_string(),
                time_window: None,
            },
            IncidenceEntry {
                label: "Formación".to_string(),
                time_window: None,
            },
        ];
        assert_eq!(joined_labels(&entries), "Médico + Formación");
    }
}
