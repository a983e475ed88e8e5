//! Core data models for the register filler.
//!
//! This module contains the domain models shared by the calculation,
//! holiday and document modules.

mod incidence;
mod page;
mod period;
mod schedule;
mod warning;

pub use incidence::{
    COMMENT_DELIMITER, DayIncidences, DayRange, IncidenceEntry, IncidenceRecord, MAX_DAY_OF_MONTH,
    TimeWindowSpec, joined_labels,
};
pub use page::{Anchor, DrawInstruction, LabelField, PageBucket};
pub use period::{OUTPUT_FILE_PREFIX, Period, SPANISH_MONTHS, SUPPORTED_YEARS};
pub use schedule::{BaseSchedule, TIME_FORMAT, TimeWindow, WorkedInterval, minutes_to_hours};
pub use warning::{
    INVALID_TIME_WINDOW, OVERLAY_FAILED, RegisterWarning, UNPAIRED_INCIDENCE_VALUE, UNPLACED_BUCKET,
};
