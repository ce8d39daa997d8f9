//! The dashboard session — mutable cells plus derived-view accessors.

use std::collections::BTreeMap;

use inspection_map_analytics::query::rank_filter;
use inspection_map_analytics::{FilteredView, community, facility};
use inspection_map_analytics_models::{CommunityStats, FacilityFailureCount};
use inspection_map_geography::join::join_statistics;
use inspection_map_geography_models::CommunityChoropleth;
use inspection_map_inspection_models::{EmbeddingSource, InspectionRecord, QuarterlyFailure};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::registry::DatasetRegistry;
use crate::selection::SelectionState;

/// Smallest accepted recency bound.
pub const MIN_RECENCY_BOUND: usize = 500;
/// Granularity of the recency-bound control.
pub const RECENCY_BOUND_STEP: usize = 500;
/// Recency bound a fresh session starts with.
pub const DEFAULT_RECENCY_BOUND: usize = 5000;

/// Which record attribute the embedding scatter colors by.
///
/// Pure presentation state carried by the session; no analytics routine
/// reads it.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ColorMode {
    /// Color by the critical-violation flag.
    CriticalFound,
    /// Color by pass/fail outcome.
    #[default]
    PassFlag,
    /// Color by the full result category.
    Results,
}

/// One analyst session over the loaded registry.
///
/// The mutable cells (active source, recency bound, selection, color
/// mode) are only written through the methods here — interaction handlers
/// run one mutation to completion, then the presentation layer re-reads
/// the derived accessors, which recompute in full from current inputs.
#[derive(Debug)]
pub struct DashboardSession {
    registry: DatasetRegistry,
    source: EmbeddingSource,
    recency_bound: usize,
    selection: SelectionState,
    color_mode: ColorMode,
}

impl DashboardSession {
    /// Starts a session over a loaded registry with default cells.
    #[must_use]
    pub fn new(registry: DatasetRegistry) -> Self {
        Self {
            registry,
            source: EmbeddingSource::default(),
            recency_bound: DEFAULT_RECENCY_BOUND,
            selection: SelectionState::default(),
            color_mode: ColorMode::default(),
        }
    }

    /// The active embedding source.
    #[must_use]
    pub const fn source(&self) -> EmbeddingSource {
        self.source
    }

    /// The current recency bound.
    #[must_use]
    pub const fn recency_bound(&self) -> usize {
        self.recency_bound
    }

    /// The currently selected community, if any.
    #[must_use]
    pub fn selected_community(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// The active scatter color mode.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Switches the active embedding source by selector key (unknown keys
    /// fall back to `violations_umap`).
    ///
    /// Always drops the community selection: selections are not assumed
    /// meaningful across embedding sources.
    pub fn set_embedding_source(&mut self, key: &str) {
        self.source = EmbeddingSource::from_key(key);
        self.selection.clear();
        log::debug!("Active embedding source: {}", self.source);
    }

    /// Sets the recency bound, clamped up to [`MIN_RECENCY_BOUND`].
    pub fn set_recency_bound(&mut self, bound: usize) {
        self.recency_bound = bound.max(MIN_RECENCY_BOUND);
    }

    /// Sets the scatter color mode.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    /// Routes a click-style activation event carrying a community name to
    /// the selection toggle. Clicking the selected community deselects it.
    pub fn handle_community_click(&mut self, community_name: &str) {
        self.selection.select(community_name);
    }

    /// Unconditionally clears the community selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Records of the active embedding dataset, unfiltered.
    #[must_use]
    pub fn active_records(&self) -> &[InspectionRecord] {
        self.registry.records(self.source)
    }

    /// The visible window: recency-bounded, selection-filtered records of
    /// the active dataset.
    #[must_use]
    pub fn filtered_view(&self) -> FilteredView<'_> {
        rank_filter(
            self.active_records(),
            self.recency_bound,
            self.selection.selected(),
        )
    }

    /// Per-community statistics over the visible window.
    #[must_use]
    pub fn community_statistics(&self) -> BTreeMap<String, CommunityStats> {
        community::community_statistics(&self.filtered_view())
    }

    /// Per-community statistics joined onto every boundary, zero-filled
    /// where a community has no visible records.
    #[must_use]
    pub fn choropleth(&self) -> Vec<CommunityChoropleth> {
        join_statistics(
            self.registry.boundaries(),
            &self.community_statistics(),
            self.selection.selected(),
        )
    }

    /// Top failing facility types within the visible window.
    #[must_use]
    pub fn top_failing_facilities(&self, limit: usize) -> Vec<FacilityFailureCount> {
        facility::top_failing_facilities(&self.filtered_view(), self.selection.selected(), limit)
    }

    /// The precomputed quarterly failure aggregates, as loaded.
    #[must_use]
    pub fn quarterly(&self) -> &[QuarterlyFailure] {
        self.registry.quarterly()
    }
}
