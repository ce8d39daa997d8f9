#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard state and orchestration.
//!
//! Owns the loaded [`registry::DatasetRegistry`], the mutable session
//! cells (active embedding source, recency bound, community selection,
//! color mode), and re-derives every linked view from current inputs on
//! demand. The presentation layer calls the [`session::DashboardSession`]
//! mutators from its interaction handlers and re-reads the derived
//! accessors afterwards; displayed aggregates therefore always reflect
//! current inputs.

pub mod load;
pub mod registry;
pub mod selection;
pub mod session;

use thiserror::Error;

/// Errors that can occur while loading dashboard inputs.
///
/// Any of these is fatal to startup: the dashboard never renders from a
/// partially loaded registry.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing the quarterly aggregate file failed.
    #[error("Source parse error: {0}")]
    Source(#[from] inspection_map_source::SourceError),

    /// Parsing the boundary file failed.
    #[error("Geography error: {0}")]
    Geo(#[from] inspection_map_geography::GeoError),
}
