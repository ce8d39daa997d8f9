//! Parses the community-area `GeoJSON` file into boundaries.
//!
//! Features without a usable community name or areal geometry are skipped
//! with a warning; they cannot key a join, so carrying them would only
//! produce unrenderable rows.

use geo::MultiPolygon;
use geojson::GeoJson;
use inspection_map_geography_models::CommunityBoundary;

use crate::GeoError;

/// Parses a `GeoJSON` `FeatureCollection` of community areas.
///
/// Each feature must carry a `community_name` property and a Polygon or
/// `MultiPolygon` geometry (normalized to `MultiPolygon`). An `area_num`
/// property is picked up when present, numeric or string-encoded.
///
/// # Errors
///
/// Returns [`GeoError`] if the input is not valid `GeoJSON` or is not a
/// `FeatureCollection`.
pub fn parse_boundaries(raw: &str) -> Result<Vec<CommunityBoundary>, GeoError> {
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(GeoError::Conversion {
            message: "expected a GeoJSON FeatureCollection".to_owned(),
        });
    };

    let mut boundaries = Vec::new();

    for feature in collection.features {
        let Some(name) = feature
            .properties
            .as_ref()
            .and_then(|props| props.get("community_name"))
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
        else {
            log::warn!("Skipping boundary feature without a community_name property");
            continue;
        };

        let Some(geometry) = feature.geometry.and_then(to_multipolygon) else {
            log::warn!("Skipping boundary '{name}' without areal geometry");
            continue;
        };

        let area_num = feature
            .properties
            .as_ref()
            .and_then(|props| props.get("area_num"))
            .and_then(area_number);

        boundaries.push(CommunityBoundary {
            community_name: name,
            area_num,
            geometry,
        });
    }

    log::info!("Loaded {} community boundaries", boundaries.len());
    Ok(boundaries)
}

/// Converts a `GeoJSON` geometry into a [`MultiPolygon`].
/// Handles both `Polygon` and `MultiPolygon` geometry types.
fn to_multipolygon(geometry: geojson::Geometry) -> Option<MultiPolygon<f64>> {
    let geo_geom: geo::Geometry<f64> = geometry.try_into().ok()?;
    match geo_geom {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}

/// Reads an area number that may be numeric or string-encoded.
fn area_number(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
