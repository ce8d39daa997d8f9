#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community boundary ingestion and the statistics→boundary join.
//!
//! Parses the community-area `GeoJSON` file into
//! [`inspection_map_geography_models::CommunityBoundary`] values and joins
//! per-community statistics onto them for the choropleth map.

pub mod ingest;
pub mod join;

use thiserror::Error;

/// Errors that can occur during geography operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// `GeoJSON` parsing failed.
    #[error("GeoJSON parse error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
