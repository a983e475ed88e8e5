//! Register planning.
//!
//! Turns a request and the month's holidays into the labels each page
//! bucket must carry. Planning never touches the template, so a plan can
//! be inspected (dry run) before anything is written.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::calculation::{
    LabelContext, build_bucket_labels, build_incidence_index, paginate, working_days_in_period,
};
use crate::error::EngineResult;
use crate::models::{DrawInstruction, PageBucket, Period, RegisterWarning};

use super::request::RegisterRequest;

/// The days and labels assigned to one page bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketPlan {
    /// The bucket.
    pub bucket: PageBucket,
    /// Working days drawn in the bucket, one per column.
    pub days: Vec<u32>,
    /// Labels to draw.
    pub draws: Vec<DrawInstruction>,
}

/// A fully computed register, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterPlan {
    /// The month being registered.
    pub period: Period,
    /// Holidays of the month that were excluded.
    pub holidays: BTreeSet<u32>,
    /// Working days in increasing order.
    pub working_days: Vec<u32>,
    /// One entry per bucket, in page order.
    pub buckets: Vec<BucketPlan>,
    /// Recoverable problems found while planning.
    pub warnings: Vec<RegisterWarning>,
}

impl RegisterPlan {
    /// Returns the plan of a bucket.
    pub fn bucket(&self, bucket: PageBucket) -> Option<&BucketPlan> {
        self.buckets.iter().find(|plan| plan.bucket == bucket)
    }

    /// Returns the labels of a bucket; empty when the bucket has no days.
    pub fn draws_for(&self, bucket: PageBucket) -> &[DrawInstruction] {
        self.bucket(bucket)
            .map(|plan| plan.draws.as_slice())
            .unwrap_or_default()
    }

    /// Returns the total number of labels across all buckets.
    pub fn draw_count(&self) -> usize {
        self.buckets.iter().map(|plan| plan.draws.len()).sum()
    }
}

/// Plans a register.
///
/// # Arguments
///
/// * `request` - The validated request
/// * `holidays` - Holiday days of month for the request's period
///
/// # Returns
///
/// The plan, or `InvalidDayRange` if an incidence's day range is malformed.
/// Malformed incidence windows do not fail the plan; they are reported in
/// [`RegisterPlan::warnings`].
pub fn build_register_plan(
    request: &RegisterRequest,
    holidays: &BTreeSet<u32>,
) -> EngineResult<RegisterPlan> {
    let incidences = build_incidence_index(&request.incidences)?;
    let working_days = working_days_in_period(&request.period, request.start_day, holidays);
    let pagination = paginate(&working_days);

    debug!(
        period = %request.period,
        working_days = working_days.len(),
        first = pagination.first.len(),
        middle = pagination.middle.len(),
        last = pagination.last.len(),
        "Working days paginated"
    );

    let context = LabelContext {
        period: &request.period,
        schedule: &request.schedule,
        default_hours: request.worker_hours,
        incidences: &incidences,
    };

    let mut warnings = request.warnings.clone();
    let buckets = PageBucket::ALL
        .into_iter()
        .map(|bucket| {
            let days = pagination.days_for(bucket);
            let labels = build_bucket_labels(bucket, days, &context);
            warnings.extend(labels.warnings);
            BucketPlan {
                bucket,
                days: days.to_vec(),
                draws: labels.draws,
            }
        })
        .collect();

    Ok(RegisterPlan {
        period: request.period,
        holidays: holidays.clone(),
        working_days,
        buckets,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{FIRST_PAGE_CAPACITY, MIDDLE_PAGE_CAPACITY};
    use crate::error::EngineError;
    use crate::models::{
        BaseSchedule, INVALID_TIME_WINDOW, IncidenceRecord, LabelField, UNPAIRED_INCIDENCE_VALUE,
    };

    fn request(month: u32, year: i32) -> RegisterRequest {
        let schedule: BaseSchedule = "15:00-19:00".parse().unwrap();
        RegisterRequest::new(Period::new(month, year).unwrap(), schedule)
    }

    fn texts(plan: &RegisterPlan, bucket: PageBucket, field: LabelField) -> Vec<String> {
        plan.draws_for(bucket)
            .iter()
            .filter(|d| d.field == field)
            .map(|d| d.text.clone())
            .collect()
    }

    #[test]
    fn test_july_2024_pagination() {
        // July 2024: 23 weekdays, no holidays.
        let plan = build_register_plan(&request(7, 2024), &BTreeSet::new()).unwrap();

        assert_eq!(plan.working_days.len(), 23);
        assert_eq!(plan.bucket(PageBucket::First).unwrap().days.len(), FIRST_PAGE_CAPACITY);
        assert_eq!(plan.bucket(PageBucket::Middle).unwrap().days.len(), 13);
        assert!(plan.bucket(PageBucket::Last).unwrap().days.is_empty());
        assert!(plan.draws_for(PageBucket::Last).is_empty());
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_headers_only_on_first_bucket() {
        let plan = build_register_plan(&request(7, 2024), &BTreeSet::new()).unwrap();

        assert_eq!(texts(&plan, PageBucket::First, LabelField::MonthHeader), vec!["JULIO"]);
        assert_eq!(texts(&plan, PageBucket::First, LabelField::YearHeader), vec!["2024"]);
        assert!(texts(&plan, PageBucket::Middle, LabelField::MonthHeader).is_empty());
    }

    #[test]
    fn test_holidays_and_start_day_are_excluded() {
        let mut req = request(5, 2024);
        req.start_day = 6;
        let holidays = BTreeSet::from([1, 2, 15]);

        let plan = build_register_plan(&req, &holidays).unwrap();
        assert_eq!(plan.working_days.first(), Some(&6));
        assert!(!plan.working_days.contains(&15));
        assert_eq!(plan.holidays, holidays);
    }

    #[test]
    fn test_bucket_totals_match_working_days() {
        let plan = build_register_plan(&request(1, 2025), &BTreeSet::from([1, 6])).unwrap();
        let total: usize = plan.buckets.iter().map(|b| b.days.len()).sum();
        assert_eq!(total, plan.working_days.len());
        assert!(plan.working_days.len() <= FIRST_PAGE_CAPACITY + MIDDLE_PAGE_CAPACITY);
    }

    #[test]
    fn test_incidence_days_render_worked_intervals() {
        let req = request(7, 2024).with_incidence(IncidenceRecord::new(
            "Médico",
            "1-1",
            Some("16:00-17:00 # Revisión"),
        ));
        let plan = build_register_plan(&req, &BTreeSet::new()).unwrap();

        let first = plan.draws_for(PageBucket::First);
        let day_one: Vec<_> = first.iter().filter(|d| d.column == 0).collect();
        let entries: Vec<_> = day_one
            .iter()
            .filter(|d| d.field == LabelField::Entry)
            .map(|d| (d.slot, d.text.as_str()))
            .collect();
        assert_eq!(entries, vec![(0, "15:00"), (1, "17:00")]);

        let hours: Vec<_> = day_one
            .iter()
            .filter(|d| d.field == LabelField::Hours)
            .map(|d| d.text.as_str())
            .collect();
        assert_eq!(hours, vec!["3.00"]);
    }

    #[test]
    fn test_bad_window_becomes_warning() {
        let req = request(7, 2024).with_incidence(IncidenceRecord::new("Médico", "2-2", Some("mañana")));
        let plan = build_register_plan(&req, &BTreeSet::new()).unwrap();

        assert_eq!(plan.warnings.len(), 1);
        assert_eq!(plan.warnings[0].code, INVALID_TIME_WINDOW);
        assert_eq!(plan.warnings[0].day, Some(2));
    }

    #[test]
    fn test_request_warnings_are_carried() {
        let mut req = request(7, 2024);
        req.warnings
            .push(RegisterWarning::new(UNPAIRED_INCIDENCE_VALUE, "Ignored day range '3-3'"));
        let plan = build_register_plan(&req, &BTreeSet::new()).unwrap();
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_invalid_day_range_fails() {
        let req = request(7, 2024).with_incidence(IncidenceRecord::new("Vacaciones", "15-3", None));
        assert!(matches!(
            build_register_plan(&req, &BTreeSet::new()),
            Err(EngineError::InvalidDayRange { .. })
        ));
    }
}
