//! People-operations core for an internal HR platform.
//!
//! Two subsystems live here: the access core, which decides per subject and
//! per resource which operations are authorized, and the evaluation core,
//! which turns periodic performance and language assessments into derived
//! per-person and per-company scores and nudges the evaluated person's
//! office to refresh its own aggregate. Persistence, user lookup, and office
//! aggregation stay behind traits so callers can wire any backend.

pub mod access;
pub mod config;
pub mod error;
pub mod evaluations;
pub mod people;
pub mod telemetry;
