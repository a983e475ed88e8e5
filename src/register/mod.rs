//! The register pipeline.
//!
//! [`RegisterRequest`] → holidays → [`RegisterPlan`] → template overlay →
//! output file. Planning is pure; only [`generate_register`] reads the
//! template and writes the result.

mod assemble;
mod plan;
mod request;
mod summary;

pub use assemble::{assemble_document, generate_register, plan_register};
pub use plan::{BucketPlan, RegisterPlan, build_register_plan};
pub use request::{DEFAULT_SCHEDULE, DEFAULT_WORKER_HOURS, RegisterRequest, pair_incidences};
pub use summary::{PageSummary, RegisterOutcome, RegisterSummary};
