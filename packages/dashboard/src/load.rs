//! One-time initial bulk load of the dashboard inputs.
//!
//! The six input files are read concurrently and joined before any
//! parsing or derived computation begins. Any failure aborts the whole
//! load — the dashboard never renders from a partial registry.

use std::path::Path;

use inspection_map_geography::ingest::parse_boundaries;
use inspection_map_source::{parse::parse_records, quarterly::parse_quarterly};
use tokio::fs;

use crate::DashboardError;
use crate::registry::DatasetRegistry;

/// Input file names within the data directory.
pub mod files {
    /// Violations-text t-SNE embedding dataset.
    pub const VIOLATIONS_TSNE: &str = "tsne_violations_with_community.csv";
    /// Violations-text UMAP embedding dataset.
    pub const VIOLATIONS_UMAP: &str = "umap_violations_with_community.csv";
    /// Feature-based t-SNE embedding dataset.
    pub const DIRECT: &str = "tsne_direct_with_community.csv";
    /// MLP hidden-layer t-SNE embedding dataset.
    pub const MLP: &str = "tsne_mlp_with_community.csv";
    /// Community boundary `GeoJSON`.
    pub const BOUNDARIES: &str = "chicago_communities.geojson";
    /// Precomputed quarterly failure rates.
    pub const QUARTERLY: &str = "quarterly_failure_rates.json";
}

/// Loads every dashboard input from `dir` and assembles the registry.
///
/// # Errors
///
/// Returns [`DashboardError`] if any file cannot be read, the boundary
/// file is not valid `GeoJSON`, or the quarterly file is not valid JSON.
pub async fn load_from_dir(dir: &Path) -> Result<DatasetRegistry, DashboardError> {
    let (tsne_raw, umap_raw, direct_raw, mlp_raw, boundaries_raw, quarterly_raw) = tokio::try_join!(
        fs::read_to_string(dir.join(files::VIOLATIONS_TSNE)),
        fs::read_to_string(dir.join(files::VIOLATIONS_UMAP)),
        fs::read_to_string(dir.join(files::DIRECT)),
        fs::read_to_string(dir.join(files::MLP)),
        fs::read_to_string(dir.join(files::BOUNDARIES)),
        fs::read_to_string(dir.join(files::QUARTERLY)),
    )?;

    let violations_tsne = parse_records(&tsne_raw);
    let violations_umap = parse_records(&umap_raw);
    let direct = parse_records(&direct_raw);
    let mlp = parse_records(&mlp_raw);
    let boundaries = parse_boundaries(&boundaries_raw)?;
    let quarterly = parse_quarterly(&quarterly_raw)?;

    log::info!(
        "Loaded {}/{}/{}/{} inspection records, {} boundaries, {} quarterly rows from {}",
        violations_tsne.len(),
        violations_umap.len(),
        direct.len(),
        mlp.len(),
        boundaries.len(),
        quarterly.len(),
        dir.display(),
    );

    Ok(DatasetRegistry::new(
        violations_tsne,
        violations_umap,
        direct,
        mlp,
        boundaries,
        quarterly,
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use inspection_map_inspection_models::EmbeddingSource;

    use super::*;

    const CSV: &str = "Inspection_ID,DBA_Name,Inspection_Date,Results,community_name\n\
                       1,Cafe,2024-01-01,Pass,Loop\n\
                       2,Diner,2024-01-02,Fail,Loop";

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "community_name": "Loop", "area_num": 32 },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
            }
        }]
    }"#;

    const QUARTERLY: &str = r#"[{"Year-Quarter": "2023-Q1", "Facility_Type": "Restaurant", "Failure_Rate": 20.0, "Failures": 10, "Total": 50}]"#;

    fn fixture_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("inspection_map_{}_{name}", std::process::id()))
    }

    async fn write_fixtures(dir: &Path) {
        fs::create_dir_all(dir).await.unwrap();
        for file in [
            files::VIOLATIONS_TSNE,
            files::VIOLATIONS_UMAP,
            files::DIRECT,
            files::MLP,
        ] {
            fs::write(dir.join(file), CSV).await.unwrap();
        }
        fs::write(dir.join(files::BOUNDARIES), GEOJSON).await.unwrap();
        fs::write(dir.join(files::QUARTERLY), QUARTERLY).await.unwrap();
    }

    #[tokio::test]
    async fn loads_all_inputs() {
        let dir = fixture_dir("load_ok");
        write_fixtures(&dir).await;

        let registry = load_from_dir(&dir).await.unwrap();
        for source in EmbeddingSource::all() {
            assert_eq!(registry.records(*source).len(), 2);
        }
        assert_eq!(registry.boundaries().len(), 1);
        assert_eq!(registry.boundaries()[0].community_name, "Loop");
        assert_eq!(registry.quarterly().len(), 1);

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn missing_input_fails_the_whole_load() {
        let dir = fixture_dir("load_missing");
        fs::create_dir_all(&dir).await.unwrap();
        // No files written: the very first read must sink the load.
        let result = load_from_dir(&dir).await;
        assert!(matches!(result, Err(DashboardError::Io(_))));

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_boundaries_fail_the_whole_load() {
        let dir = fixture_dir("load_bad_geo");
        write_fixtures(&dir).await;
        fs::write(dir.join(files::BOUNDARIES), "not geojson")
            .await
            .unwrap();

        let result = load_from_dir(&dir).await;
        assert!(matches!(result, Err(DashboardError::Geo(_))));

        fs::remove_dir_all(&dir).await.unwrap();
    }
}
