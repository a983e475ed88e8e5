//! Working-day selection.
//!
//! This module determines which days of a month the worker is expected to
//! clock in: weekdays that are not public holidays and not before the day
//! the register starts on.

use std::collections::BTreeSet;

use chrono::{Datelike, Weekday};

use crate::error::EngineResult;
use crate::models::Period;

/// Returns true for Monday through Friday.
pub fn is_weekday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Selects the working days of a month.
///
/// A day is included if it falls Monday to Friday, is not in `holidays`, and
/// is not before `start_day`.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month (1-12)
/// * `start_day` - Days before this one are skipped
/// * `holidays` - Days of the month that are public holidays
///
/// # Returns
///
/// The working days in ascending order, or `InvalidPeriod` if the month and
/// year do not form a calendar month.
///
/// # Example
///
/// ```
/// use jornada_register::calculation::select_working_days;
/// use std::collections::BTreeSet;
///
/// // May 2024: the 1st is a Wednesday and a holiday.
/// let holidays = BTreeSet::from([1, 2]);
/// let days = select_working_days(2024, 5, 1, &holidays).unwrap();
/// assert_eq!(&days[..4], &[3, 6, 7, 8]);
/// ```
pub fn select_working_days(
    year: i32,
    month: u32,
    start_day: u32,
    holidays: &BTreeSet<u32>,
) -> EngineResult<Vec<u32>> {
    let period = Period::new(month, year)?;
    Ok(working_days_in_period(&period, start_day, holidays))
}

/// Selects the working days of an already validated period.
pub fn working_days_in_period(
    period: &Period,
    start_day: u32,
    holidays: &BTreeSet<u32>,
) -> Vec<u32> {
    (start_day.max(1)..=period.days_in_month())
        .filter(|day| !holidays.contains(day))
        .filter(|&day| {
            period
                .date(day)
                .is_some_and(|date| is_weekday(date.weekday()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn test_july_2024_without_holidays() {
        // July 2024 starts on a Monday: 23 weekdays.
        let days = select_working_days(2024, 7, 1, &BTreeSet::new()).unwrap();
        assert_eq!(days.len(), 23);
        assert_eq!(&days[..6], &[1, 2, 3, 4, 5, 8]);
        assert_eq!(*days.last().unwrap(), 31);
    }

    #[test]
    fn test_holidays_are_excluded() {
        let holidays = BTreeSet::from([15]);
        let days = select_working_days(2024, 8, 1, &holidays).unwrap();
        assert!(!days.contains(&15));
        assert!(days.contains(&14));
        assert!(days.contains(&16));
    }

    #[test]
    fn test_holiday_on_weekend_changes_nothing() {
        // 2024-06-01 is a Saturday.
        let with = select_working_days(2024, 6, 1, &BTreeSet::from([1])).unwrap();
        let without = select_working_days(2024, 6, 1, &BTreeSet::new()).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_start_day_floor() {
        let days = select_working_days(2024, 8, 5, &BTreeSet::new()).unwrap();
        assert_eq!(days.first(), Some(&5));
        assert!(days.iter().all(|&d| d >= 5));
    }

    #[test]
    fn test_start_day_after_month_end_is_empty() {
        let days = select_working_days(2024, 2, 30, &BTreeSet::new()).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_start_day_zero_behaves_like_one() {
        let zero = select_working_days(2024, 7, 0, &BTreeSet::new()).unwrap();
        let one = select_working_days(2024, 7, 1, &BTreeSet::new()).unwrap();
        assert_eq!(zero, one);
    }

    #[test]
    fn test_december_rolls_over_year() {
        // December 2025: 31st is a Wednesday.
        let days = select_working_days(2025, 12, 1, &BTreeSet::new()).unwrap();
        assert_eq!(days.last(), Some(&31));
    }

    #[test]
    fn test_leap_february() {
        // 2024-02-29 is a Thursday.
        let days = select_working_days(2024, 2, 1, &BTreeSet::new()).unwrap();
        assert_eq!(days.last(), Some(&29));
    }

    #[test]
    fn test_invalid_month_returns_error() {
        match select_working_days(2024, 13, 1, &BTreeSet::new()) {
            Err(EngineError::InvalidPeriod { .. }) => {}
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
        assert!(select_working_days(2024, 0, 1, &BTreeSet::new()).is_err());
    }

    proptest! {
        #[test]
        fn prop_working_days_respect_filters(
            year in 1990i32..2100,
            month in 1u32..=12,
            start_day in 0u32..32,
            holidays in proptest::collection::btree_set(1u32..=31, 0..6),
        ) {
            let days = select_working_days(year, month, start_day, &holidays).unwrap();

            for window in days.windows(2) {
                prop_assert!(window[0] < window[1]);
            }
            for &day in &days {
                let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
                prop_assert!(is_weekday(date.weekday()));
                prop_assert!(!holidays.contains(&day));
                prop_assert!(day >= start_day);
            }
        }
    }
}
