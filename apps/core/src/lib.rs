//! # Taskwise Core
//!
//! Task description classification and enrichment, served over HTTP.
//!
//! ## Modules
//! - `classifier`: category, priority, entity and action heuristics
//! - `enrichment`: fills task drafts from their description
//! - `api`: axum router and handlers
//! - `config`, `telemetry`, `error`: ambient plumbing

pub mod api;
pub mod classifier;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod models;
pub mod telemetry;

pub use classifier::{classify_task, ClassificationResult, TaskClassifier};
pub use error::AppError;

#[cfg(test)]
mod tests;
