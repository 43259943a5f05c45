//! Deterministic aura scoring for structured vision-analysis results.
//!
//! The [`scoring`] module holds the pure engine. [`vision`] and [`roast`] model the
//! collaborators on either side of it, and the remaining modules carry the service plumbing.

pub mod assessment;
pub mod config;
pub mod error;
pub mod roast;
pub mod router;
pub mod scoring;
pub mod telemetry;
pub mod vision;

pub use assessment::AuraAssessment;
pub use router::aura_router;
