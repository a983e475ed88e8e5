//! Error types for the register filler.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while building a working-day register.
//! Input and IO errors are fatal; [`EngineError::InvalidTimeWindow`] and
//! [`EngineError::Overlay`] are recovered from at the entry and page level.

use thiserror::Error;

/// The main error type for the register filler.
///
/// # Example
///
/// ```
/// use jornada_register::error::EngineError;
///
/// let error = EngineError::InvalidDayRange {
///     range: "15-3".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid day range: 15-3");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The period could not be parsed or does not form a calendar month.
    #[error("Invalid period '{input}': {message}")]
    InvalidPeriod {
        /// The period text as supplied.
        input: String,
        /// A description of what was wrong.
        message: String,
    },

    /// An incidence day range was not of the form `lo-hi` with `lo <= hi`.
    #[error("Invalid day range: {range}")]
    InvalidDayRange {
        /// The range text as supplied.
        range: String,
    },

    /// An incidence label was supplied without a day range.
    #[error("Incidence '{label}' has no day range")]
    MissingDayRange {
        /// The label left without a range.
        label: String,
    },

    /// The base schedule could not be parsed or is empty.
    #[error("Invalid schedule '{input}': {message}")]
    InvalidSchedule {
        /// The schedule text as supplied.
        input: String,
        /// A description of what was wrong.
        message: String,
    },

    /// An incidence time window could not be parsed.
    #[error("Invalid time window '{input}': {message}")]
    InvalidTimeWindow {
        /// The window text after comment stripping.
        input: String,
        /// A description of what was wrong.
        message: String,
    },

    /// No holiday calendar is available for the requested region.
    #[error("Unsupported holiday region: {}{}", .country, .subdivision.as_deref().map(|s| format!("-{s}")).unwrap_or_default())]
    UnsupportedRegion {
        /// ISO country code.
        country: String,
        /// Optional subdivision code.
        subdivision: Option<String>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The PDF template does not exist.
    #[error("Template not found: {path}")]
    TemplateNotFound {
        /// The template path.
        path: String,
    },

    /// The PDF template exists but could not be loaded.
    #[error("Failed to read template '{path}': {message}")]
    TemplateRead {
        /// The template path.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The output document could not be written.
    #[error("Failed to write output '{path}': {message}")]
    OutputWrite {
        /// The output path.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A page overlay could not be built or merged.
    #[error("Failed to overlay page {page}: {message}")]
    Overlay {
        /// Zero-based page index.
        page: usize,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
