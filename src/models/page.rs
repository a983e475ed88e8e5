//! Page and draw-instruction models.
//!
//! This module defines the [`PageBucket`] grouping of template pages and the
//! [`DrawInstruction`] values handed to document assembly.

use serde::{Deserialize, Serialize};

/// One of the three fixed-capacity page groupings of the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageBucket {
    /// The first template page.
    First,
    /// Every page between the first and the last.
    Middle,
    /// The final template page.
    Last,
}

impl PageBucket {
    /// All buckets in page order.
    pub const ALL: [PageBucket; 3] = [PageBucket::First, PageBucket::Middle, PageBucket::Last];

    /// Returns the bucket a template page belongs to.
    ///
    /// Page 0 is always [`PageBucket::First`], so a one-page template only
    /// ever receives the first bucket.
    ///
    /// # Example
    ///
    /// ```
    /// use jornada_register::models::PageBucket;
    ///
    /// assert_eq!(PageBucket::for_page(0, 3), PageBucket::First);
    /// assert_eq!(PageBucket::for_page(1, 3), PageBucket::Middle);
    /// assert_eq!(PageBucket::for_page(2, 3), PageBucket::Last);
    /// assert_eq!(PageBucket::for_page(0, 1), PageBucket::First);
    /// ```
    pub fn for_page(page_index: usize, page_count: usize) -> Self {
        if page_index == 0 {
            PageBucket::First
        } else if page_index + 1 == page_count {
            PageBucket::Last
        } else {
            PageBucket::Middle
        }
    }
}

impl std::fmt::Display for PageBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageBucket::First => write!(f, "first"),
            PageBucket::Middle => write!(f, "middle"),
            PageBucket::Last => write!(f, "last"),
        }
    }
}

/// The form field a label is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelField {
    /// Day of month.
    Day,
    /// Clock-in time.
    Entry,
    /// Clock-out time.
    Exit,
    /// Total hours worked.
    Hours,
    /// Incidence labels.
    Incidence,
    /// Upper-case month name on the first page.
    MonthHeader,
    /// Year on the first page.
    YearHeader,
}

/// An absolute position on the page, in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Horizontal offset from the left edge.
    pub x: f32,
    /// Vertical offset from the bottom edge.
    pub y: f32,
}

/// A single text label to draw on a page.
///
/// Positions are resolved by [`crate::calculation::position`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    /// The page bucket the label belongs to.
    pub bucket: PageBucket,
    /// Column (day index within the bucket).
    pub column: usize,
    /// The form field.
    pub field: LabelField,
    /// Stacking slot; non-zero for the second and later entry/exit pairs.
    pub slot: usize,
    /// The text to draw.
    pub text: String,
    /// Rotation in degrees counter-clockwise.
    pub rotation: f32,
}
