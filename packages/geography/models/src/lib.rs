#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community boundary types.
//!
//! A community is a named administrative region used both to group
//! inspection statistics and to key boundary polygons. Boundaries are
//! loaded once and immutable; the choropleth row is the derived shape the
//! map layer consumes on every recompute.

use geo::MultiPolygon;
use inspection_map_analytics_models::CommunityStats;
use serde::{Deserialize, Serialize};

/// A named geographic community area with its polygon geometry.
///
/// Geometry is normalized to a [`MultiPolygon`] at ingestion regardless of
/// whether the source feature was a Polygon or `MultiPolygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityBoundary {
    /// Community name; the join key against inspection records.
    pub community_name: String,
    /// Community area number, when the source feature carries one.
    pub area_num: Option<i32>,
    /// Boundary geometry.
    pub geometry: MultiPolygon<f64>,
}

/// One boundary joined with its statistics for the current filtered view.
///
/// Every boundary produces exactly one row: communities with no records
/// in the view carry zero-valued statistics rather than being omitted, so
/// the whole map always renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityChoropleth {
    /// Community name.
    pub community_name: String,
    /// Community area number, when known.
    pub area_num: Option<i32>,
    /// Aggregated statistics for this community.
    #[serde(flatten)]
    pub stats: CommunityStats,
    /// Whether this community is the current selection.
    pub is_selected: bool,
}
