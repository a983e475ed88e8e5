//! Schedule and time-window models.
//!
//! This module defines the [`BaseSchedule`], [`TimeWindow`] and
//! [`WorkedInterval`] types used by the worked-period calculator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Format used to parse and render times of day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a `HH:MM-HH:MM` pair into two times.
///
/// Returns a plain description of the problem so callers can wrap it in the
/// error variant that matches their severity.
pub(crate) fn parse_time_pair(input: &str) -> Result<(NaiveTime, NaiveTime), String> {
    let (start, end) = input
        .split_once('-')
        .ok_or_else(|| "expected format HH:MM-HH:MM".to_string())?;
    let parse = |part: &str| {
        NaiveTime::parse_from_str(part.trim(), TIME_FORMAT)
            .map_err(|e| format!("'{}' is not a valid time: {}", part.trim(), e))
    };
    Ok((parse(start)?, parse(end)?))
}

/// A window of time within a day.
///
/// Windows are half-open in spirit: a window whose `start` equals its `end`
/// covers no time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeWindow {
    /// The start of the window.
    pub start: NaiveTime,
    /// The end of the window.
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Creates a new window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns true if the window covers no time.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the window length in whole minutes (zero for empty windows).
    pub fn minutes(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_minutes()
        }
    }
}

impl FromStr for TimeWindow {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = parse_time_pair(s).map_err(|message| EngineError::InvalidTimeWindow {
            input: s.to_string(),
            message,
        })?;
        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// The worker's default daily schedule.
///
/// The start is always strictly before the end.
///
/// # Example
///
/// ```
/// use jornada_register::models::BaseSchedule;
///
/// let schedule: BaseSchedule = "15:00-19:00".parse().unwrap();
/// assert_eq!(schedule.start_label(), "15:00");
/// assert_eq!(schedule.end_label(), "19:00");
/// assert!("19:00-15:00".parse::<BaseSchedule>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSchedule {
    window: TimeWindow,
}

impl BaseSchedule {
    /// Creates a schedule, rejecting an empty or inverted window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        let window = TimeWindow::new(start, end);
        if window.is_empty() {
            return Err(EngineError::InvalidSchedule {
                input: window.to_string(),
                message: "start must be before end".to_string(),
            });
        }
        Ok(Self { window })
    }

    /// Returns the start of the working day.
    pub fn start(&self) -> NaiveTime {
        self.window.start
    }

    /// Returns the end of the working day.
    pub fn end(&self) -> NaiveTime {
        self.window.end
    }

    /// Returns the schedule as a time window.
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Returns the start time formatted as `HH:MM`.
    pub fn start_label(&self) -> String {
        self.window.start.format(TIME_FORMAT).to_string()
    }

    /// Returns the end time formatted as `HH:MM`.
    pub fn end_label(&self) -> String {
        self.window.end.format(TIME_FORMAT).to_string()
    }

    /// Clamps a window to the schedule bounds.
    ///
    /// Returns `None` when nothing of the window lies inside the schedule.
    pub fn clamp(&self, window: TimeWindow) -> Option<TimeWindow> {
        let clamped = TimeWindow::new(
            window.start.max(self.window.start),
            window.end.min(self.window.end),
        );
        (!clamped.is_empty()).then_some(clamped)
    }
}

impl FromStr for BaseSchedule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = parse_time_pair(s).map_err(|message| EngineError::InvalidSchedule {
            input: s.to_string(),
            message,
        })?;
        Self::new(start, end).map_err(|err| match err {
            EngineError::InvalidSchedule { message, .. } => EngineError::InvalidSchedule {
                input: s.to_string(),
                message,
            },
            other => other,
        })
    }
}

impl fmt::Display for BaseSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.window.fmt(f)
    }
}

/// A contiguous span of time actually worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkedInterval {
    /// Clock-in time.
    pub start: NaiveTime,
    /// Clock-out time.
    pub end: NaiveTime,
}

impl WorkedInterval {
    /// Returns the worked minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns the clock-in time formatted as `HH:MM`.
    pub fn start_label(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    /// Returns the clock-out time formatted as `HH:MM`.
    pub fn end_label(&self) -> String {
        self.end.format(TIME_FORMAT).to_string()
    }
}

impl From<WorkedInterval> for TimeWindow {
    fn from(interval: WorkedInterval) -> Self {
        TimeWindow::new(interval.start, interval.end)
    }
}

/// Converts a number of minutes into hours rounded to two decimal places.
///
/// Midpoints round away from zero, so 20 minutes becomes `0.33` and
/// 50 minutes becomes `0.83`.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
