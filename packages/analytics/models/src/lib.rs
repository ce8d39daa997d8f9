#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived statistic types for the linked dashboard views.
//!
//! These are the outputs of the aggregation routines: recomputed in full
//! whenever the filtered record set changes, never persisted.

use serde::{Deserialize, Serialize};

/// Aggregated inspection statistics for a single community.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    /// Total inspections in the filtered view.
    pub total: u64,
    /// Inspections with a critical violation.
    pub critical: u64,
    /// Inspections that passed.
    pub passed: u64,
    /// `100 × critical / total`; 0 when there are no inspections.
    pub critical_rate: f64,
    /// `100 × passed / total`; 0 when there are no inspections.
    pub pass_rate: f64,
}

/// Failed-inspection count for a single facility type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityFailureCount {
    /// Facility type; absent source values surface as `"Unknown"`.
    pub facility_type: String,
    /// Number of failed inspections of this facility type.
    pub count: u64,
}
