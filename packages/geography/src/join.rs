//! Joins per-community statistics onto boundary records.

use std::collections::BTreeMap;

use inspection_map_analytics_models::CommunityStats;
use inspection_map_geography_models::{CommunityBoundary, CommunityChoropleth};

/// Joins aggregated statistics onto every boundary.
///
/// Boundaries with no matching statistic receive a zero-valued
/// [`CommunityStats`] rather than being omitted — every boundary must
/// render. The output order follows the boundary order.
#[must_use]
pub fn join_statistics(
    boundaries: &[CommunityBoundary],
    stats: &BTreeMap<String, CommunityStats>,
    selected_community: Option<&str>,
) -> Vec<CommunityChoropleth> {
    boundaries
        .iter()
        .map(|boundary| CommunityChoropleth {
            community_name: boundary.community_name.clone(),
            area_num: boundary.area_num,
            stats: stats
                .get(&boundary.community_name)
                .cloned()
                .unwrap_or_default(),
            is_selected: selected_community == Some(boundary.community_name.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use super::*;

    fn boundary(name: &str, area_num: i32) -> CommunityBoundary {
        CommunityBoundary {
            community_name: name.to_owned(),
            area_num: Some(area_num),
            geometry: MultiPolygon(Vec::new()),
        }
    }

    #[test]
    fn every_boundary_is_present_with_zero_fill() {
        let boundaries = vec![boundary("Loop", 32), boundary("Hyde Park", 41)];
        let mut stats = BTreeMap::new();
        stats.insert(
            "Loop".to_owned(),
            CommunityStats {
                total: 4,
                critical: 1,
                passed: 3,
                critical_rate: 25.0,
                pass_rate: 75.0,
            },
        );

        let rows = join_statistics(&boundaries, &stats, None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].community_name, "Loop");
        assert_eq!(rows[0].stats.total, 4);
        assert_eq!(rows[1].community_name, "Hyde Park");
        assert_eq!(rows[1].stats, CommunityStats::default());
        assert!((rows[1].stats.critical_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn selection_flag_marks_only_the_selected_community() {
        let boundaries = vec![boundary("Loop", 32), boundary("Hyde Park", 41)];
        let rows = join_statistics(&boundaries, &BTreeMap::new(), Some("Hyde Park"));
        assert!(!rows[0].is_selected);
        assert!(rows[1].is_selected);
    }
}
