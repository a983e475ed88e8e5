//! Built-in Spanish holiday calendar.
//!
//! National holidays plus the Community of Madrid (`MD`). Holidays that the
//! regions move from year to year (Sunday substitutions, San José, Santiago)
//! are not listed and belong in the configuration's extra dates.

use chrono::{Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};

use super::{HolidayProvider, HolidayRegion};

/// Fixed-date national holidays as (month, day).
///
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Labour Day (May 1)
/// * Assumption (Aug 15)
/// * National Day (Oct 12)
/// * All Saints (Nov 1)
/// * Constitution Day (Dec 6)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25)
const NATIONAL_FIXED: [(u32, u32); 9] = [
    (1, 1),
    (1, 6),
    (5, 1),
    (8, 15),
    (10, 12),
    (11, 1),
    (12, 6),
    (12, 8),
    (12, 25),
];

/// Fixed-date Madrid holidays: Community Day (May 2).
const MADRID_FIXED: [(u32, u32); 1] = [(5, 2)];

/// Returns Easter Sunday of a Gregorian year.
///
/// Uses the anonymous Gregorian computus.
///
/// # Example
///
/// ```
/// use jornada_register::holidays::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Holiday calendar for Spain and the Community of Madrid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHolidays;

impl BuiltinHolidays {
    fn fixed(year: i32, days: &[(u32, u32)]) -> impl Iterator<Item = NaiveDate> + '_ {
        days.iter()
            .filter_map(move |&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
    }
}

impl HolidayProvider for BuiltinHolidays {
    fn holidays(&self, region: &HolidayRegion, year: i32) -> EngineResult<Vec<NaiveDate>> {
        let unsupported = || EngineError::UnsupportedRegion {
            country: region.country.clone(),
            subdivision: region.subdivision.clone(),
        };

        if !region.country.eq_ignore_ascii_case("ES") {
            return Err(unsupported());
        }
        let madrid = match region.subdivision.as_deref() {
            None => false,
            Some(code) if code.eq_ignore_ascii_case("MD") => true,
            Some(_) => return Err(unsupported()),
        };

        let easter = easter_sunday(year).ok_or_else(unsupported)?;

        let mut dates: Vec<NaiveDate> = Self::fixed(year, &NATIONAL_FIXED).collect();
        // Good Friday
        dates.push(easter - Duration::days(2));

        if madrid {
            dates.extend(Self::fixed(year, &MADRID_FIXED));
            // Maundy Thursday
            dates.push(easter - Duration::days(3));
        }

        dates.sort();
        Ok(dates)
    }
}
