//! Configuration loading and management for the register filler.
//!
//! This module provides functionality to load the run configuration from a
//! YAML file: template location, output directory and holiday region.
//!
//! # Example
//!
//! ```no_run
//! use jornada_register::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./registro.yaml").unwrap();
//! println!("Output directory: {}", config.config().output_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_PATH, HolidayConfig, RegisterConfig};
