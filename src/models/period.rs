//! Period model.
//!
//! This module contains the [`Period`] type that fixes the month and year a
//! register is generated for.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Spanish month names used for headers and output file names.
pub const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Years a [`Period`] may be built for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Prefix of every generated register file name.
pub const OUTPUT_FILE_PREFIX: &str = "registro_jornada_laboral_";

/// A calendar month of a given year.
///
/// A `Period` can only be built for a month that forms a valid calendar
/// date, so every accessor is infallible.
///
/// # Example
///
/// ```
/// use jornada_register::models::Period;
///
/// let period: Period = "02-2024".parse().unwrap();
/// assert_eq!(period.month(), 2);
/// assert_eq!(period.year(), 2024);
/// assert_eq!(period.days_in_month(), 29);
/// assert_eq!(period.month_name(), "febrero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    /// Creates a period, validating the month and year.
    ///
    /// # Returns
    ///
    /// Returns `InvalidPeriod` if the month is outside 1..=12 or the year is
    /// outside [`SUPPORTED_YEARS`].
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let input = format!("{month:02}-{year}");
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                input,
                message: "month must be between 1 and 12".to_string(),
            });
        }
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(EngineError::InvalidPeriod {
                input,
                message: format!(
                    "year must be between {} and {}",
                    SUPPORTED_YEARS.start(),
                    SUPPORTED_YEARS.end()
                ),
            });
        }
        Ok(Self { month, year })
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the date of the given day of month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => 31,
        }
    }

    fn is_leap_year(&self) -> bool {
        (self.year % 4 == 0 && self.year % 100 != 0) || self.year % 400 == 0
    }

    /// Returns the Spanish name of the month in lower case.
    pub fn month_name(&self) -> &'static str {
        SPANISH_MONTHS[(self.month - 1) as usize]
    }

    /// Returns the deterministic output file name for this period.
    ///
    /// ```
    /// use jornada_register::models::Period;
    ///
    /// let period = Period::new(7, 2024).unwrap();
    /// assert_eq!(period.output_file_name(), "registro_jornada_laboral_julio2024.pdf");
    /// ```
    pub fn output_file_name(&self) -> String {
        format!("{OUTPUT_FILE_PREFIX}{}{}.pdf", self.month_name(), self.year)
    }
}

impl FromStr for Period {
    type Err = EngineError;

    /// Parses a period in `MM-YYYY` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidPeriod {
            input: s.to_string(),
            message: message.to_string(),
        };

        let (month, year) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected format MM-YYYY"))?;
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| invalid("year is not a number"))?;

        Self::new(month, year).map_err(|err| match err {
            EngineError::InvalidPeriod { message, .. } => EngineError::InvalidPeriod {
                input: s.to_string(),
                message,
            },
            other => other,
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.month, self.year)
    }
}
