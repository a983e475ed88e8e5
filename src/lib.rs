//! Working-day register filler
//!
//! This crate computes the working days of a month, applies a worker's
//! absences ("incidencias") to their daily schedule, and overlays the
//! resulting clock-in/out times onto the multi-page "registro de jornada
//! laboral" PDF template.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod document;
pub mod error;
pub mod holidays;
pub mod models;
pub mod register;
