//! Page layout and coordinate mapping.
//!
//! All positions are in PDF points measured from the bottom-left corner of
//! the template page. Each day occupies one column; each field sits at a
//! fixed height above a shared baseline.

use crate::models::{Anchor, DrawInstruction, LabelField, PageBucket};

/// Fixed geometry of the register template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// X of the first column on the first page.
    pub first_start_x: f32,
    /// X of the first column on middle pages.
    pub middle_start_x: f32,
    /// X of the first column on the last page.
    pub last_start_x: f32,
    /// Distance between day columns.
    pub column_width: f32,
    /// Shared baseline all field offsets are measured from.
    pub baseline_y: f32,
    /// Offset of the day number.
    pub day_y: f32,
    /// Offset of the clock-in time.
    pub entry_y: f32,
    /// Offset of the clock-out time.
    pub exit_y: f32,
    /// Offset of the total hours.
    pub hours_y: f32,
    /// Offset of the incidence labels.
    pub incidence_y: f32,
    /// Extra offset for each further entry/exit pair on the same day.
    pub stack_offset: f32,
    /// Month name header position on the first page.
    pub month_header: Anchor,
    /// Year header position on the first page.
    pub year_header: Anchor,
    /// Font size for every label.
    pub font_size: f32,
    /// Text rotation in degrees.
    pub rotation: f32,
}

/// Geometry of the `registro_jornada_laboral.pdf` template.
pub const PAGE_LAYOUT: PageLayout = PageLayout {
    first_start_x: 235.0,
    middle_start_x: 83.0,
    last_start_x: 83.0,
    column_width: 32.0,
    baseline_y: 88.0,
    day_y: 0.0,
    entry_y: 43.0,
    exit_y: 103.0,
    hours_y: 413.0,
    incidence_y: 463.0,
    stack_offset: 120.0,
    month_header: Anchor { x: 193.0, y: 88.0 },
    year_header: Anchor { x: 182.0, y: 90.0 },
    font_size: 8.0,
    rotation: 90.0,
};

impl PageLayout {
    /// Returns the x of the first column of a bucket.
    pub fn start_x(&self, bucket: PageBucket) -> f32 {
        match bucket {
            PageBucket::First => self.first_start_x,
            PageBucket::Middle => self.middle_start_x,
            PageBucket::Last => self.last_start_x,
        }
    }

    /// Returns the x of a day column.
    pub fn anchor(&self, bucket: PageBucket, column: usize) -> f32 {
        self.start_x(bucket) + column as f32 * self.column_width
    }

    /// Returns the y of a field; `slot` stacks entry/exit pairs downward
    /// in the rotated frame.
    pub fn field_y(&self, field: LabelField, slot: usize) -> f32 {
        let stacked = slot as f32 * self.stack_offset;
        match field {
            LabelField::Day => self.baseline_y + self.day_y,
            LabelField::Entry => self.baseline_y + self.entry_y + stacked,
            LabelField::Exit => self.baseline_y + self.exit_y + stacked,
            LabelField::Hours => self.baseline_y + self.hours_y,
            LabelField::Incidence => self.baseline_y + self.incidence_y,
            LabelField::MonthHeader => self.month_header.y,
            LabelField::YearHeader => self.year_header.y,
        }
    }

    /// Resolves the absolute position of a draw instruction.
    pub fn position(&self, draw: &DrawInstruction) -> Anchor {
        match draw.field {
            LabelField::MonthHeader => self.month_header,
            LabelField::YearHeader => self.year_header,
            field => Anchor {
                x: self.anchor(draw.bucket, draw.column),
                y: self.field_y(field, draw.slot),
            },
        }
    }
}

/// Returns the x of a day column using [`PAGE_LAYOUT`].
///
/// # Example
///
/// ```
/// use jornada_register::calculation::anchor;
/// use jornada_register::models::PageBucket;
///
/// assert_eq!(anchor(PageBucket::First, 0), 235.0);
/// assert_eq!(anchor(PageBucket::Middle, 2), 147.0);
/// ```
pub fn anchor(bucket: PageBucket, column: usize) -> f32 {
    PAGE_LAYOUT.anchor(bucket, column)
}

/// Returns the y of a field using [`PAGE_LAYOUT`].
pub fn field_y(field: LabelField, slot: usize) -> f32 {
    PAGE_LAYOUT.field_y(field, slot)
}

/// Resolves a draw instruction's position using [`PAGE_LAYOUT`].
pub fn position(draw: &DrawInstruction) -> Anchor {
    PAGE_LAYOUT.position(draw)
}
