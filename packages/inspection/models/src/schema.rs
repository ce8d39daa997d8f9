//! Explicit column schema for the delimited inspection files.
//!
//! The coercion policy lives here rather than inline in the parser so it
//! stays auditable in one place: a column is either numeric (float-coerced,
//! malformed/missing → 0) or text (passed through after trimming).

/// Column names as they appear in the input file headers.
pub mod columns {
    /// Unique inspection identifier.
    pub const INSPECTION_ID: &str = "Inspection_ID";
    /// Business license number.
    pub const LICENSE: &str = "License";
    /// Doing-business-as name.
    pub const DBA_NAME: &str = "DBA_Name";
    /// Street address.
    pub const ADDRESS: &str = "Address";
    /// Facility type.
    pub const FACILITY_TYPE: &str = "Facility_Type";
    /// Inspection date.
    pub const INSPECTION_DATE: &str = "Inspection_Date";
    /// Result category.
    pub const RESULTS: &str = "Results";
    /// Pass flag (0/1).
    pub const PASS_FLAG: &str = "pass_flag";
    /// Fail flag (0/1).
    pub const FAIL_FLAG: &str = "fail_flag";
    /// Critical-violation flag (0/1).
    pub const CRITICAL_FOUND: &str = "criticalFound";
    /// Count of critical violations.
    pub const CRITICAL_COUNT: &str = "criticalCount";
    /// Count of serious violations.
    pub const SERIOUS_COUNT: &str = "seriousCount";
    /// Count of minor violations.
    pub const MINOR_COUNT: &str = "minorCount";
    /// Community area name.
    pub const COMMUNITY_NAME: &str = "community_name";
    /// Community area number.
    pub const AREA_NUM: &str = "area_num";
    /// Facility latitude.
    pub const LATITUDE: &str = "Latitude";
    /// Facility longitude.
    pub const LONGITUDE: &str = "Longitude";
    /// Embedding x coordinate.
    pub const EMBEDDING_X: &str = "tsne_x";
    /// Embedding y coordinate.
    pub const EMBEDDING_Y: &str = "tsne_y";
}

/// How a column's raw value is interpreted during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Float-coerced; malformed or missing values become 0.
    Numeric,
    /// Passed through unmodified (after field trimming).
    Text,
}

/// Columns subject to numeric coercion. Everything else is text.
pub const NUMERIC_COLUMNS: &[&str] = &[
    columns::INSPECTION_ID,
    columns::LICENSE,
    columns::LATITUDE,
    columns::LONGITUDE,
    columns::CRITICAL_FOUND,
    columns::PASS_FLAG,
    columns::FAIL_FLAG,
    columns::CRITICAL_COUNT,
    columns::SERIOUS_COUNT,
    columns::MINOR_COUNT,
    columns::EMBEDDING_X,
    columns::EMBEDDING_Y,
    columns::AREA_NUM,
];

/// Returns how values in the named column are interpreted.
#[must_use]
pub fn column_kind(name: &str) -> ColumnKind {
    if NUMERIC_COLUMNS.contains(&name) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}
