//! The rank-filter query applied on every interaction.

use inspection_map_inspection_models::InspectionRecord;

/// Materialized result of the rank-filter query: the visible window of
/// records, ordered most-recent first.
///
/// Borrowed from the active dataset and recomputed on every change to
/// dataset, recency bound, or selection; never persisted.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    records: Vec<&'a InspectionRecord>,
}

impl<'a> FilteredView<'a> {
    /// Records in the view, most recent first.
    #[must_use]
    pub fn records(&self) -> &[&'a InspectionRecord] {
        &self.records
    }

    /// Number of records in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &'a InspectionRecord> + '_ {
        self.records.iter().copied()
    }
}

/// Applies the rank-filter query.
///
/// Sorts by inspection date descending (stable: records sharing a date
/// keep their original relative order, undated records sort last), keeps
/// the first `recency_bound` records, then — if a community is selected —
/// retains only exact case-sensitive matches.
///
/// The community filter runs after truncation: the window always
/// represents the `recency_bound` most recent inspections city-wide, and
/// a selection acts as a lens on that fixed window. A selection can
/// shrink the visible set below the bound but never reaches further back
/// in time to compensate.
#[must_use]
pub fn rank_filter<'a>(
    records: &'a [InspectionRecord],
    recency_bound: usize,
    selected_community: Option<&str>,
) -> FilteredView<'a> {
    let mut sorted: Vec<&InspectionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.inspection_date.cmp(&a.inspection_date));
    sorted.truncate(recency_bound);

    if let Some(community) = selected_community {
        sorted.retain(|record| record.community_name == community);
    }

    FilteredView { records: sorted }
}
