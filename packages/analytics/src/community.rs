//! Per-community aggregation.

use std::collections::BTreeMap;

use inspection_map_analytics_models::CommunityStats;

use crate::FilteredView;

/// Community name used for records that cannot be attributed to an area.
const UNKNOWN_COMMUNITY: &str = "Unknown";

/// Aggregates the filtered view into per-community statistics.
///
/// Records with an empty or `"Unknown"` community name contribute to no
/// community at all. Rates are 0 for an empty group, never `NaN`.
#[must_use]
pub fn community_statistics(view: &FilteredView<'_>) -> BTreeMap<String, CommunityStats> {
    let mut stats: BTreeMap<String, CommunityStats> = BTreeMap::new();

    for record in view.iter() {
        if record.community_name.is_empty() || record.community_name == UNKNOWN_COMMUNITY {
            continue;
        }
        let entry = stats.entry(record.community_name.clone()).or_default();
        entry.total += 1;
        entry.critical += u64::from(record.critical_found);
        entry.passed += u64::from(record.pass_flag);
    }

    for group in stats.values_mut() {
        group.critical_rate = percentage(group.critical, group.total);
        group.pass_rate = percentage(group.passed, group.total);
    }

    stats
}

/// `100 × part / total`, defined as 0 for an empty total.
#[allow(clippy::cast_precision_loss)]
fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use inspection_map_inspection_models::{InspectionRecord, InspectionResult};

    use super::*;
    use crate::query::rank_filter;

    fn record(community: &str, critical_found: u8, pass_flag: u8) -> InspectionRecord {
        InspectionRecord {
            inspection_id: 0,
            license: 0,
            business_name: String::new(),
            address: String::new(),
            facility_type: String::new(),
            inspection_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            result: InspectionResult::Pass,
            pass_flag,
            fail_flag: 0,
            critical_found,
            critical_count: 0,
            serious_count: 0,
            minor_count: 0,
            community_name: community.to_owned(),
            area_num: 0,
            latitude: 0.0,
            longitude: 0.0,
            embedding_x: 0.0,
            embedding_y: 0.0,
        }
    }

    #[test]
    fn groups_and_computes_rates() {
        let records = vec![
            record("Loop", 1, 0),
            record("Loop", 0, 1),
            record("Loop", 1, 1),
            record("Loop", 0, 1),
            record("Hyde Park", 0, 1),
        ];
        let view = rank_filter(&records, records.len(), None);
        let stats = community_statistics(&view);

        let loop_stats = &stats["Loop"];
        assert_eq!(loop_stats.total, 4);
        assert_eq!(loop_stats.critical, 2);
        assert_eq!(loop_stats.passed, 3);
        assert!((loop_stats.critical_rate - 50.0).abs() < f64::EPSILON);
        assert!((loop_stats.pass_rate - 75.0).abs() < f64::EPSILON);

        let hyde_park = &stats["Hyde Park"];
        assert_eq!(hyde_park.total, 1);
        assert!((hyde_park.pass_rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn excludes_unknown_and_empty_communities() {
        let records = vec![
            record("Unknown", 1, 0),
            record("", 1, 0),
            record("Loop", 0, 1),
        ];
        let view = rank_filter(&records, records.len(), None);
        let stats = community_statistics(&view);
        assert_eq!(stats.len(), 1);
        assert!(stats.contains_key("Loop"));
    }

    #[test]
    fn empty_view_yields_empty_mapping() {
        let view = rank_filter(&[], 5000, None);
        assert!(community_statistics(&view).is_empty());
    }

    #[test]
    fn zero_total_percentage_is_zero_not_nan() {
        let rate = percentage(0, 0);
        assert!((rate - 0.0).abs() < f64::EPSILON);
        assert!(!rate.is_nan());
    }
}
