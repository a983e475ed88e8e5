//! Calculation logic for the register filler.
//!
//! This module contains the pure steps of a run: working-day selection,
//! incidence expansion, worked-period calculation, pagination, page layout
//! and per-bucket label generation.

mod day_labels;
mod incidence_index;
mod layout;
mod pagination;
mod worked_periods;
mod working_days;

pub use day_labels::{BucketLabels, LabelContext, build_bucket_labels};
pub use incidence_index::build_incidence_index;
pub use layout::{PAGE_LAYOUT, PageLayout, anchor, field_y, position};
pub use pagination::{FIRST_PAGE_CAPACITY, MIDDLE_PAGE_CAPACITY, Pagination, paginate};
pub use worked_periods::{
    WorkedPeriods, calculate_worked_periods, complement, merge_windows, worked_periods,
};
pub use working_days::{is_weekday, select_working_days, working_days_in_period};
