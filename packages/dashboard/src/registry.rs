//! Dataset registry — the immutable collections every view derives from.

use inspection_map_geography_models::CommunityBoundary;
use inspection_map_inspection_models::{EmbeddingSource, InspectionRecord, QuarterlyFailure};

/// Holds the four embedding datasets, the community boundary set, and the
/// precomputed quarterly aggregates.
///
/// Populated once by the initial load and never partially updated; the
/// only mutation is wholesale replacement at startup.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    violations_tsne: Vec<InspectionRecord>,
    violations_umap: Vec<InspectionRecord>,
    direct: Vec<InspectionRecord>,
    mlp: Vec<InspectionRecord>,
    boundaries: Vec<CommunityBoundary>,
    quarterly: Vec<QuarterlyFailure>,
}

impl DatasetRegistry {
    /// Assembles a registry from fully parsed collections.
    #[must_use]
    pub const fn new(
        violations_tsne: Vec<InspectionRecord>,
        violations_umap: Vec<InspectionRecord>,
        direct: Vec<InspectionRecord>,
        mlp: Vec<InspectionRecord>,
        boundaries: Vec<CommunityBoundary>,
        quarterly: Vec<QuarterlyFailure>,
    ) -> Self {
        Self {
            violations_tsne,
            violations_umap,
            direct,
            mlp,
            boundaries,
            quarterly,
        }
    }

    /// Records for the given embedding source.
    #[must_use]
    pub fn records(&self, source: EmbeddingSource) -> &[InspectionRecord] {
        match source {
            EmbeddingSource::ViolationsTsne => &self.violations_tsne,
            EmbeddingSource::ViolationsUmap => &self.violations_umap,
            EmbeddingSource::Direct => &self.direct,
            EmbeddingSource::Mlp => &self.mlp,
        }
    }

    /// Records for a selector key; unknown keys fall back to
    /// `violations_umap`.
    #[must_use]
    pub fn select(&self, key: &str) -> &[InspectionRecord] {
        self.records(EmbeddingSource::from_key(key))
    }

    /// The community boundary set.
    #[must_use]
    pub fn boundaries(&self) -> &[CommunityBoundary] {
        &self.boundaries
    }

    /// The precomputed quarterly failure aggregates.
    #[must_use]
    pub fn quarterly(&self) -> &[QuarterlyFailure] {
        &self.quarterly
    }
}
