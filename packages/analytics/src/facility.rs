//! Facility-type failure aggregation.

use std::collections::HashMap;

use inspection_map_analytics_models::FacilityFailureCount;

use crate::FilteredView;

/// Facility type used for records without one.
const UNKNOWN_FACILITY: &str = "Unknown";

/// Default number of facility types returned by
/// [`top_failing_facilities`].
pub const DEFAULT_FACILITY_LIMIT: usize = 10;

/// Counts failed inspections by facility type within the view.
///
/// Restricts to the selected community when one is set, then to records
/// whose result category is exactly `Fail` — failure-adjacent categories
/// like `Pass w/ Conditions` never count. Facility types sort by count
/// descending; ties keep first-encountered order, so the output is
/// deterministic for a fixed input. Zero failing records yield an empty
/// sequence — a valid terminal state, not an error.
#[must_use]
pub fn top_failing_facilities(
    view: &FilteredView<'_>,
    selected_community: Option<&str>,
    limit: usize,
) -> Vec<FacilityFailureCount> {
    let mut counts: Vec<FacilityFailureCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in view.iter() {
        if let Some(community) = selected_community
            && record.community_name != community
        {
            continue;
        }
        if !record.result.is_fail() {
            continue;
        }

        let facility_type = if record.facility_type.is_empty() {
            UNKNOWN_FACILITY
        } else {
            record.facility_type.as_str()
        };

        if let Some(&position) = positions.get(facility_type) {
            counts[position].count += 1;
        } else {
            positions.insert(facility_type, counts.len());
            counts.push(FacilityFailureCount {
                facility_type: facility_type.to_owned(),
                count: 1,
            });
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
