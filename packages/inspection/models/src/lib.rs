#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical food-inspection record types.
//!
//! This crate defines the inspection record shared across the entire
//! inspection-map system, the result-category taxonomy, the embedding
//! dataset selector, and the explicit column schema consulted during
//! ingestion. All datasets normalize into these shared types.

pub mod schema;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Outcome category of a single inspection.
///
/// The six known categories mirror the source data verbatim; anything
/// else is preserved untouched in [`InspectionResult::Other`] rather than
/// folded into a known category. Only the exact `Fail` category counts as
/// a failed inspection anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(from = "String", into = "String")]
pub enum InspectionResult {
    /// Inspection passed with no conditions.
    #[strum(serialize = "Pass")]
    Pass,
    /// Inspection failed.
    #[strum(serialize = "Fail")]
    Fail,
    /// Passed, but with correctable conditions noted.
    #[strum(serialize = "Pass w/ Conditions")]
    PassWithConditions,
    /// Inspector could not gain entry to the facility.
    #[strum(serialize = "No Entry")]
    NoEntry,
    /// Facility was not ready to be inspected.
    #[strum(serialize = "Not Ready")]
    NotReady,
    /// Facility is no longer operating.
    #[strum(serialize = "Out of Business")]
    OutOfBusiness,
    /// Any category not listed above, preserved verbatim.
    #[strum(default, to_string = "{0}")]
    Other(String),
}

impl From<String> for InspectionResult {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Other(s))
    }
}

impl From<InspectionResult> for String {
    fn from(result: InspectionResult) -> Self {
        result.to_string()
    }
}

impl InspectionResult {
    /// Returns `true` only for the exact `Fail` category.
    ///
    /// `Pass w/ Conditions` and other failure-adjacent categories are not
    /// failures.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        *self == Self::Fail
    }
}

/// Which precomputed 2-D embedding a record set carries.
///
/// All four datasets contain the same inspection identities; only the
/// embedding coordinates differ.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmbeddingSource {
    /// t-SNE over violation-text embeddings.
    ViolationsTsne,
    /// UMAP over violation-text embeddings (the primary dataset).
    #[default]
    ViolationsUmap,
    /// t-SNE over direct numeric features.
    Direct,
    /// t-SNE over MLP hidden-layer activations.
    Mlp,
}

impl EmbeddingSource {
    /// Resolves a selector key, falling back to `violations_umap` for
    /// anything unrecognized.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ViolationsTsne,
            Self::ViolationsUmap,
            Self::Direct,
            Self::Mlp,
        ]
    }

    /// Human-readable label for dataset pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViolationsTsne => "Violations Text (t-SNE)",
            Self::ViolationsUmap => "Violations Text (UMAP)",
            Self::Direct => "Feature-based (t-SNE)",
            Self::Mlp => "MLP Hidden Layer (t-SNE)",
        }
    }
}

/// One food-safety inspection event.
///
/// Created once at ingestion and immutable thereafter; every derived view
/// filters or aggregates these, never mutates them. Serde renames keep the
/// serialized shape identical to the source-file columns, so the charting
/// layer sees the same field names the input files carry.
///
/// Numeric fields are always finite: malformed or missing numeric input
/// coerces to 0 at ingestion (see [`schema`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// Unique inspection identifier.
    #[serde(rename = "Inspection_ID")]
    pub inspection_id: i64,
    /// Business license number.
    #[serde(rename = "License")]
    pub license: i64,
    /// Doing-business-as name.
    #[serde(rename = "DBA_Name")]
    pub business_name: String,
    /// Street address of the facility.
    #[serde(rename = "Address")]
    pub address: String,
    /// Facility type (e.g. "Restaurant"); may be empty in source data.
    #[serde(rename = "Facility_Type")]
    pub facility_type: String,
    /// Date the inspection took place. `None` if the source value did not
    /// parse; such records order after every dated record.
    #[serde(rename = "Inspection_Date")]
    pub inspection_date: Option<NaiveDate>,
    /// Result category.
    #[serde(rename = "Results")]
    pub result: InspectionResult,
    /// 1 if the inspection passed, else 0.
    #[serde(rename = "pass_flag")]
    pub pass_flag: u8,
    /// 1 if the inspection failed, else 0.
    #[serde(rename = "fail_flag")]
    pub fail_flag: u8,
    /// 1 if a critical violation was found, else 0.
    #[serde(rename = "criticalFound")]
    pub critical_found: u8,
    /// Number of critical violations cited.
    #[serde(rename = "criticalCount")]
    pub critical_count: u32,
    /// Number of serious violations cited.
    #[serde(rename = "seriousCount")]
    pub serious_count: u32,
    /// Number of minor violations cited.
    #[serde(rename = "minorCount")]
    pub minor_count: u32,
    /// Community area name; may be empty or `"Unknown"`.
    #[serde(rename = "community_name")]
    pub community_name: String,
    /// Community area number.
    #[serde(rename = "area_num")]
    pub area_num: i32,
    /// Facility latitude.
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Facility longitude.
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Embedding x coordinate (t-SNE or UMAP, per dataset).
    #[serde(rename = "tsne_x")]
    pub embedding_x: f64,
    /// Embedding y coordinate (t-SNE or UMAP, per dataset).
    #[serde(rename = "tsne_y")]
    pub embedding_y: f64,
}

/// One row of the precomputed quarterly failure-rate file.
///
/// Produced offline and consumed by the temporal view as-is; the core
/// performs no further computation over these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyFailure {
    /// Quarter label (e.g. "2023-Q2").
    #[serde(rename = "Year-Quarter")]
    pub quarter: String,
    /// Worst-performing facility type for the quarter.
    #[serde(rename = "Facility_Type")]
    pub facility_type: String,
    /// Peak failure rate in percent.
    #[serde(rename = "Failure_Rate")]
    pub failure_rate: f64,
    /// Failed inspections behind the peak rate.
    #[serde(rename = "Failures")]
    pub failures: u64,
    /// Total inspections behind the peak rate.
    #[serde(rename = "Total")]
    pub total: u64,
}
