//! Configuration types for the register filler.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default so a partial file, or no file at all, is valid.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holidays::HolidayRegion;

/// Default template file name.
pub const DEFAULT_TEMPLATE_PATH: &str = "registro_jornada_laboral.pdf";

/// Default directory generated registers are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "registros";

/// Holiday settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayConfig {
    /// The region whose public holidays apply.
    #[serde(flatten)]
    pub region: HolidayRegion,
    /// Additional non-working dates (local holidays, regional substitutions).
    #[serde(default)]
    pub extra: Vec<NaiveDate>,
}

/// The complete run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Path to the PDF template.
    pub template_path: PathBuf,
    /// Directory the filled register is written to.
    pub output_dir: PathBuf,
    /// Holiday settings.
    pub holidays: HolidayConfig,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            holidays: HolidayConfig::default(),
        }
    }
}

impl RegisterConfig {
    /// Returns the full path of the output file for a file name.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
