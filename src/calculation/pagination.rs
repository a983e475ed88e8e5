//! Page pagination.
//!
//! The register template has room for a fixed number of days on its first
//! page and on each middle page; the last page takes whatever is left.

use serde::Serialize;

use crate::models::PageBucket;

/// Number of day columns on the first page.
pub const FIRST_PAGE_CAPACITY: usize = 10;

/// Number of day columns on a middle page.
pub const MIDDLE_PAGE_CAPACITY: usize = 14;

/// Working days split across the three page buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination<'a> {
    /// Days drawn on the first page.
    pub first: &'a [u32],
    /// Days drawn on the middle page(s).
    pub middle: &'a [u32],
    /// Remaining days, drawn on the last page.
    pub last: &'a [u32],
}

impl<'a> Pagination<'a> {
    /// Returns the days assigned to a bucket.
    pub fn days_for(&self, bucket: PageBucket) -> &'a [u32] {
        match bucket {
            PageBucket::First => self.first,
            PageBucket::Middle => self.middle,
            PageBucket::Last => self.last,
        }
    }

    /// Returns the total number of days across all buckets.
    pub fn len(&self) -> usize {
        self.first.len() + self.middle.len() + self.last.len()
    }

    /// Returns true if no bucket has any day.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits working days into page buckets, preserving their order.
///
/// # Example
///
/// ```
/// use jornada_register::calculation::paginate;
///
/// let days: Vec<u32> = (1..=22).collect();
/// let pages = paginate(&days);
/// assert_eq!(pages.first.len(), 10);
/// assert_eq!(pages.middle.len(), 12);
/// assert!(pages.last.is_empty());
/// ```
pub fn paginate(days: &[u32]) -> Pagination<'_> {
    let (first, rest) = days.split_at(days.len().min(FIRST_PAGE_CAPACITY));
    let (middle, last) = rest.split_at(rest.len().min(MIDDLE_PAGE_CAPACITY));
    Pagination {
        first,
        middle,
        last,
    }
}
