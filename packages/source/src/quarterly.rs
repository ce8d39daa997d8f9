//! Precomputed quarterly failure-rate parsing.
//!
//! The quarterly file is reduced offline and consumed by the temporal
//! view as-is; unlike record parsing, a malformed file here is an
//! ingestion failure rather than a per-field coercion case.

use inspection_map_inspection_models::QuarterlyFailure;

use crate::SourceError;

/// Parses the precomputed quarterly aggregate JSON file.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the input is not a JSON array of
/// quarterly rows.
pub fn parse_quarterly(raw: &str) -> Result<Vec<QuarterlyFailure>, SourceError> {
    let rows: Vec<QuarterlyFailure> = serde_json::from_str(raw)?;
    log::debug!("Parsed {} quarterly failure rows", rows.len());
    Ok(rows)
}
