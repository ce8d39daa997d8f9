#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Inspection data ingestion.
//!
//! Parses the delimited inspection record files into typed
//! [`inspection_map_inspection_models::InspectionRecord`]s and the
//! precomputed quarterly aggregate file into
//! [`inspection_map_inspection_models::QuarterlyFailure`] rows.
//!
//! Record parsing is pure and infallible: per-field problems coerce (see
//! [`parse`]) instead of erroring. Only the quarterly file, which is
//! produced offline and expected to be well-formed, parses fallibly.

pub mod parse;
pub mod quarterly;

use thiserror::Error;

/// Errors that can occur while parsing source files.
#[derive(Debug, Error)]
pub enum SourceError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
