//! Label generation for a page bucket.
//!
//! Builds the draw instructions for every day assigned to a bucket: the day
//! number, clock-in/out times, total hours and incidence labels.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    BaseSchedule, DayIncidences, DrawInstruction, LabelField, PageBucket, Period, RegisterWarning,
    joined_labels,
};

use super::layout::PAGE_LAYOUT;
use super::worked_periods::calculate_worked_periods;

/// Draw instructions and warnings for one page bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketLabels {
    /// Labels to draw, in drawing order.
    pub draws: Vec<DrawInstruction>,
    /// Recoverable problems found while building the labels.
    pub warnings: Vec<RegisterWarning>,
}

/// Inputs shared by every bucket of a run.
#[derive(Debug, Clone, Copy)]
pub struct LabelContext<'a> {
    /// The register period.
    pub period: &'a Period,
    /// The worker's base schedule.
    pub schedule: &'a BaseSchedule,
    /// Hours figure drawn for days without incidences.
    pub default_hours: Decimal,
    /// Incidences by day.
    pub incidences: &'a DayIncidences,
}

/// Formats an hours figure with exactly two decimals.
fn hours_label(hours: Decimal) -> String {
    format!("{:.2}", hours)
}

/// Builds the labels for the days assigned to a bucket.
///
/// The column of each day is its index within `days`. Days without
/// incidences get the base schedule and `default_hours`; days with
/// incidences get their joined labels, one entry/exit pair per worked
/// interval, and the total hours only when some time was worked. The first
/// bucket also carries the month and year headers.
///
/// An empty `days` slice yields no labels at all.
pub fn build_bucket_labels(
    bucket: PageBucket,
    days: &[u32],
    context: &LabelContext<'_>,
) -> BucketLabels {
    let mut labels = BucketLabels::default();
    if days.is_empty() {
        return labels;
    }

    let make = |column: usize, field: LabelField, slot: usize, text: String| DrawInstruction {
        bucket,
        column,
        field,
        slot,
        text,
        rotation: PAGE_LAYOUT.rotation,
    };

    if bucket == PageBucket::First {
        labels.draws.push(make(
            0,
            LabelField::MonthHeader,
            0,
            context.period.month_name().to_uppercase(),
        ));
        labels.draws.push(make(
            0,
            LabelField::YearHeader,
            0,
            context.period.year().to_string(),
        ));
    }

    for (column, &day) in days.iter().enumerate() {
        labels
            .draws
            .push(make(column, LabelField::Day, 0, day.to_string()));

        let entries = context
            .incidences
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default();

        if entries.is_empty() {
            labels.draws.push(make(
                column,
                LabelField::Entry,
                0,
                context.schedule.start_label(),
            ));
            labels.draws.push(make(
                column,
                LabelField::Exit,
                0,
                context.schedule.end_label(),
            ));
            labels.draws.push(make(
                column,
                LabelField::Hours,
                0,
                hours_label(context.default_hours),
            ));
            continue;
        }

        labels.draws.push(make(
            column,
            LabelField::Incidence,
            0,
            joined_labels(entries),
        ));

        let periods = calculate_worked_periods(context.schedule, entries);
        debug!(
            day,
            intervals = periods.worked.len(),
            whole_day = periods.whole_day_absence,
            "Worked periods calculated"
        );

        for (slot, interval) in periods.worked.iter().enumerate() {
            labels
                .draws
                .push(make(column, LabelField::Entry, slot, interval.start_label()));
            labels
                .draws
                .push(make(column, LabelField::Exit, slot, interval.end_label()));
        }

        let total = periods.total_hours();
        if total > Decimal::ZERO {
            labels
                .draws
                .push(make(column, LabelField::Hours, 0, hours_label(total)));
        }

        labels
            .warnings
            .extend(periods.warnings.into_iter().map(|w| w.on_day(day)));
    }

    labels
}
