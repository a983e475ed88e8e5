//! Public holiday lookup.
//!
//! Holidays come from a [`HolidayProvider`], queried once per run for the
//! configured region and the period's year, then narrowed to the days of
//! the requested month.

mod spain;

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::Period;

pub use spain::{BuiltinHolidays, easter_sunday};

/// A country and optional subdivision whose holidays apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRegion {
    /// ISO 3166-1 country code (e.g., "ES").
    pub country: String,
    /// Subdivision code within the country (e.g., "MD" for Madrid).
    #[serde(default)]
    pub subdivision: Option<String>,
}

impl HolidayRegion {
    /// Creates a region.
    pub fn new(country: impl Into<String>, subdivision: Option<&str>) -> Self {
        Self {
            country: country.into(),
            subdivision: subdivision.map(str::to_string),
        }
    }
}

impl Default for HolidayRegion {
    fn default() -> Self {
        Self::new("ES", Some("MD"))
    }
}

/// Source of public holiday dates.
pub trait HolidayProvider {
    /// Returns every holiday of `year` observed in `region`.
    fn holidays(&self, region: &HolidayRegion, year: i32) -> EngineResult<Vec<NaiveDate>>;
}

/// A provider returning a fixed list of dates regardless of region.
///
/// # Example
///
/// ```
/// use jornada_register::holidays::{FixedHolidays, HolidayProvider, HolidayRegion};
/// use chrono::NaiveDate;
///
/// let provider = FixedHolidays::new(vec![NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()]);
/// let dates = provider.holidays(&HolidayRegion::default(), 2024).unwrap();
/// assert_eq!(dates.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHolidays {
    dates: Vec<NaiveDate>,
}

impl FixedHolidays {
    /// Creates a provider over the given dates.
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self { dates }
    }
}

impl HolidayProvider for FixedHolidays {
    fn holidays(&self, _region: &HolidayRegion, year: i32) -> EngineResult<Vec<NaiveDate>> {
        Ok(self
            .dates
            .iter()
            .copied()
            .filter(|d| d.year() == year)
            .collect())
    }
}

/// Collects the holiday days of month for a period.
///
/// `extra` dates (from configuration) are added to whatever the provider
/// returns; dates outside the period are dropped.
pub fn holidays_in_period(
    provider: &dyn HolidayProvider,
    region: &HolidayRegion,
    extra: &[NaiveDate],
    period: &Period,
) -> EngineResult<BTreeSet<u32>> {
    let dates = provider.holidays(region, period.year())?;

    let days: BTreeSet<u32> = dates
        .iter()
        .chain(extra)
        .filter(|d| d.year() == period.year() && d.month() == period.month())
        .map(|d| d.day())
        .collect();

    debug!(
        country = %region.country,
        subdivision = region.subdivision.as_deref().unwrap_or("-"),
        period = %period,
        holidays = ?days,
        "Holidays resolved"
    );

    Ok(days)
}
