//! Register request construction.
//!
//! The command line supplies incidences as three parallel lists (labels,
//! day ranges and optional windows); this module pairs them up and parses
//! the rest of the request into validated types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{BaseSchedule, IncidenceRecord, Period, RegisterWarning, UNPAIRED_INCIDENCE_VALUE};

/// Default base schedule.
pub const DEFAULT_SCHEDULE: &str = "15:00-19:00";

/// Default hours figure drawn on days without incidences.
pub const DEFAULT_WORKER_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 1);

/// Everything needed to plan one month's register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// The month being registered.
    pub period: Period,
    /// Days before this day of month are not registered.
    pub start_day: u32,
    /// Incidences in the order they were supplied.
    pub incidences: Vec<IncidenceRecord>,
    /// Hours drawn for days without incidences.
    pub worker_hours: Decimal,
    /// The worker's daily schedule.
    pub schedule: BaseSchedule,
    /// Problems found while pairing the incidence lists.
    #[serde(default)]
    pub warnings: Vec<RegisterWarning>,
}

impl RegisterRequest {
    /// Creates a request with no incidences.
    pub fn new(period: Period, schedule: BaseSchedule) -> Self {
        Self {
            period,
            start_day: 1,
            incidences: Vec::new(),
            worker_hours: DEFAULT_WORKER_HOURS,
            schedule,
            warnings: Vec::new(),
        }
    }

    /// Builds a request from raw command-line values.
    ///
    /// # Errors
    ///
    /// - `InvalidPeriod` if `period` is not a valid `MM-YYYY` month
    /// - `InvalidSchedule` if `schedule` is not a non-empty `HH:MM-HH:MM`
    /// - `MissingDayRange` if a label has no matching day range
    ///
    /// Day ranges are checked later, when the incidence index is built.
    pub fn from_parts(
        period: &str,
        start_day: u32,
        labels: &[String],
        day_ranges: &[String],
        windows: &[String],
        worker_hours: Decimal,
        schedule: &str,
    ) -> EngineResult<Self> {
        let period: Period = period.parse()?;
        let schedule: BaseSchedule = schedule.parse()?;
        let (incidences, warnings) = pair_incidences(labels, day_ranges, windows)?;

        Ok(Self {
            period,
            start_day,
            incidences,
            worker_hours,
            schedule,
            warnings,
        })
    }

    /// Adds an incidence.
    pub fn with_incidence(mut self, record: IncidenceRecord) -> Self {
        self.incidences.push(record);
        self
    }
}

/// Pairs labels with day ranges and windows by position.
///
/// A label without a day range is an error. Labels beyond the last window
/// are whole-day absences. Ranges or windows beyond the last label are
/// ignored and reported as warnings.
///
/// # Example
///
/// ```
/// use jornada_register::register::pair_incidences;
///
/// let labels = vec!["Vacaciones".to_string(), "Médico".to_string()];
/// let ranges = vec!["1-5".to_string(), "8-8".to_string()];
/// let windows = vec!["# todo el día".to_string(), "10:00-11:00".to_string()];
///
/// let (records, warnings) = pair_incidences(&labels, &ranges, &windows).unwrap();
/// assert!(records[0].time_window.is_none());
/// assert_eq!(records[1].time_window.as_ref().unwrap().as_str(), "10:00-11:00");
/// assert!(warnings.is_empty());
/// ```
pub fn pair_incidences(
    labels: &[String],
    day_ranges: &[String],
    windows: &[String],
) -> EngineResult<(Vec<IncidenceRecord>, Vec<RegisterWarning>)> {
    let records = labels
        .iter()
        .enumerate()
        .map(|(i, label)| -> EngineResult<IncidenceRecord> {
            let range = day_ranges
                .get(i)
                .ok_or_else(|| EngineError::MissingDayRange {
                    label: label.clone(),
                })?;
            Ok(IncidenceRecord::new(
                label.as_str(),
                range.as_str(),
                windows.get(i).map(String::as_str),
            ))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let mut warnings = Vec::new();
    for (kind, values) in [("day range", day_ranges), ("time window", windows)] {
        for value in values.iter().skip(labels.len()) {
            warn!(kind, value = %value, "Ignoring incidence value without a label");
            warnings.push(RegisterWarning::new(
                UNPAIRED_INCIDENCE_VALUE,
                format!("Ignored {kind} '{value}' with no incidence label"),
            ));
        }
    }

    Ok((records, warnings))
}
