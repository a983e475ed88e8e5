//! Run summary.

use std::path::PathBuf;

use serde::Serialize;

use crate::models::{PageBucket, RegisterWarning};

use super::plan::RegisterPlan;

/// Days assigned to each page bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Days on the first page.
    pub first: Vec<u32>,
    /// Days on the middle page(s).
    pub middle: Vec<u32>,
    /// Days on the last page.
    pub last: Vec<u32>,
}

/// A JSON-friendly summary of a planned or generated register.
///
/// Printed as-is by `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterSummary {
    /// Period as `MM-YYYY`.
    pub period: String,
    /// File name of the register.
    pub output_file: String,
    /// Holidays of the month.
    pub holidays: Vec<u32>,
    /// Working days in increasing order.
    pub working_days: Vec<u32>,
    /// Days per page bucket.
    pub pages: PageSummary,
    /// Number of labels drawn.
    pub labels: usize,
    /// Recoverable problems.
    pub warnings: Vec<RegisterWarning>,
}

impl RegisterSummary {
    /// Summarizes a plan.
    pub fn from_plan(plan: &RegisterPlan) -> Self {
        let days = |bucket: PageBucket| {
            plan.bucket(bucket)
                .map(|b| b.days.clone())
                .unwrap_or_default()
        };

        Self {
            period: plan.period.to_string(),
            output_file: plan.period.output_file_name(),
            holidays: plan.holidays.iter().copied().collect(),
            working_days: plan.working_days.clone(),
            pages: PageSummary {
                first: days(PageBucket::First),
                middle: days(PageBucket::Middle),
                last: days(PageBucket::Last),
            },
            labels: plan.draw_count(),
            warnings: plan.warnings.clone(),
        }
    }

    /// Appends warnings raised after planning.
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = RegisterWarning>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterOutcome {
    /// Where the register was written.
    pub output_path: PathBuf,
    /// What was written.
    pub summary: RegisterSummary,
}
