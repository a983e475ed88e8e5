//! Recoverable warnings collected during a run.

use serde::{Deserialize, Serialize};

/// Warning code for an incidence window that could not be parsed.
pub const INVALID_TIME_WINDOW: &str = "INVALID_TIME_WINDOW";

/// Warning code for a page whose overlay could not be applied.
pub const OVERLAY_FAILED: &str = "OVERLAY_FAILED";

/// Warning code for day ranges or windows supplied without a label.
pub const UNPAIRED_INCIDENCE_VALUE: &str = "UNPAIRED_INCIDENCE_VALUE";

/// Warning code for a bucket with days but no template page to hold them.
pub const UNPLACED_BUCKET: &str = "UNPLACED_BUCKET";

/// A warning generated during the run.
///
/// Warnings indicate a problem that was recovered from: the offending entry
/// or page was skipped and the run carried on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The day of month the warning relates to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl RegisterWarning {
    /// Creates a warning not tied to a specific day.
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            day: None,
        }
    }

    /// Attaches the day of month to the warning.
    pub fn on_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }
}
