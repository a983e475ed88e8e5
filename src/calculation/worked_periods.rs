//! Worked-period calculation.
//!
//! This module turns a day's base schedule and its incidence entries into the
//! time actually worked. Absence windows are clamped to the schedule, merged
//! into a minimal disjoint list, and the worked intervals are the complement
//! of that list within the schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{
    BaseSchedule, INVALID_TIME_WINDOW, IncidenceEntry, RegisterWarning, TimeWindow,
    WorkedInterval, minutes_to_hours,
};

/// The outcome of the worked-period calculation for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedPeriods {
    /// Intervals actually worked, in chronological order.
    pub worked: Vec<WorkedInterval>,
    /// Merged absence windows, in chronological order.
    pub absences: Vec<TimeWindow>,
    /// Whether a whole-day incidence applied.
    pub whole_day_absence: bool,
    /// Entries that were skipped because their window could not be parsed.
    pub warnings: Vec<RegisterWarning>,
}

impl WorkedPeriods {
    /// Returns the exact number of minutes worked.
    pub fn worked_minutes(&self) -> i64 {
        self.worked.iter().map(WorkedInterval::minutes).sum()
    }

    /// Returns the hours worked, rounded to two decimal places.
    ///
    /// Rounding is applied once to the exact total.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.worked_minutes())
    }
}

/// Merges absence windows into a minimal, sorted, disjoint list.
///
/// Windows that touch (one starts exactly where the previous ends) are
/// merged. Empty windows are dropped.
///
/// # Example
///
/// ```
/// use jornada_register::calculation::merge_windows;
/// use jornada_register::models::TimeWindow;
///
/// let windows: Vec<TimeWindow> = vec![
///     "10:00-11:00".parse().unwrap(),
///     "09:30-10:30".parse().unwrap(),
/// ];
/// let merged = merge_windows(windows);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].to_string(), "09:30-11:00");
/// ```
pub fn merge_windows(mut windows: Vec<TimeWindow>) -> Vec<TimeWindow> {
    windows.retain(|w| !w.is_empty());
    windows.sort_by_key(|w| w.start);

    windows.into_iter().fold(Vec::new(), |mut merged, window| {
        match merged.last_mut() {
            Some(last) if window.start <= last.end => {
                last.end = last.end.max(window.end);
            }
            _ => merged.push(window),
        }
        merged
    })
}

/// Returns the parts of the schedule not covered by `merged`.
///
/// `merged` must be sorted and disjoint, as produced by [`merge_windows`],
/// and lie within the schedule. Zero-length gaps are never emitted.
pub fn complement(schedule: &BaseSchedule, merged: &[TimeWindow]) -> Vec<WorkedInterval> {
    let mut worked = Vec::with_capacity(merged.len() + 1);
    let mut cursor = schedule.start();

    for absence in merged {
        if cursor < absence.start {
            worked.push(WorkedInterval {
                start: cursor,
                end: absence.start,
            });
        }
        cursor = cursor.max(absence.end);
    }

    if cursor < schedule.end() {
        worked.push(WorkedInterval {
            start: cursor,
            end: schedule.end(),
        });
    }

    worked
}

/// Calculates the intervals worked on a day.
///
/// This function:
/// 1. Treats any entry without a window as a whole-day absence: the day has
///    no worked intervals, whatever other entries say
/// 2. Parses each window, logging and skipping malformed ones
/// 3. Clamps windows to the schedule and drops those left empty
/// 4. Merges the windows and returns their complement within the schedule
///
/// # Arguments
///
/// * `schedule` - The worker's base schedule
/// * `entries` - The day's incidence entries (may be empty)
///
/// # Example
///
/// ```
/// use jornada_register::calculation::calculate_worked_periods;
/// use jornada_register::models::{BaseSchedule, IncidenceEntry, TimeWindowSpec};
/// use rust_decimal::Decimal;
///
/// let schedule: BaseSchedule = "09:00-13:00".parse().unwrap();
/// let entries = vec![IncidenceEntry {
///     label: "Médico".to_string(),
///     time_window: TimeWindowSpec::new("10:00-11:00"),
/// }];
///
/// let result = calculate_worked_periods(&schedule, &entries);
/// assert_eq!(result.worked.len(), 2);
/// assert_eq!(result.total_hours(), Decimal::new(300, 2));
/// ```
pub fn calculate_worked_periods(
    schedule: &BaseSchedule,
    entries: &[IncidenceEntry],
) -> WorkedPeriods {
    if entries.iter().any(IncidenceEntry::is_whole_day) {
        return WorkedPeriods {
            worked: Vec::new(),
            absences: vec![schedule.window()],
            whole_day_absence: true,
            warnings: Vec::new(),
        };
    }

    let mut warnings = Vec::new();
    let mut windows = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(spec) = &entry.time_window else {
            continue;
        };
        match spec.parse() {
            Ok(window) => windows.extend(schedule.clamp(window)),
            Err(err) => {
                warn!(
                    label = %entry.label,
                    window = %spec.as_str(),
                    error = %err,
                    "Invalid incidence time window, ignored for worked hours"
                );
                warnings.push(RegisterWarning::new(
                    INVALID_TIME_WINDOW,
                    format!("Incidence '{}': {}", entry.label, err),
                ));
            }
        }
    }

    let absences = merge_windows(windows);
    let worked = complement(schedule, &absences);

    WorkedPeriods {
        worked,
        absences,
        whole_day_absence: false,
        warnings,
    }
}

/// Returns only the worked intervals of [`calculate_worked_periods`].
pub fn worked_periods(schedule: &BaseSchedule, entries: &[IncidenceEntry]) -> Vec<WorkedInterval> {
    calculate_worked_periods(schedule, entries).worked
}
