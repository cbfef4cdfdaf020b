use super::Solution;
use geojson::{Feature, Geometry, JsonObject, PolygonType, Value};
use polyset_core::util::geo_utils;

/// wraps polygon rings in a feature with empty properties
pub fn polygon_feature(rings: PolygonType) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(rings))),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}

pub fn solution(features: Vec<Feature>) -> Solution {
    Solution {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// the rings of a feature if its geometry is a Polygon
pub fn polygon_rings(feature: &Feature) -> Option<&PolygonType> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Polygon(rings)) => Some(rings),
        _ => None,
    }
}

/// describes the geometry of a feature for error messages
pub fn geometry_type(feature: &Feature) -> &'static str {
    match &feature.geometry {
        Some(g) => geo_utils::geometry_type_name(&g.value),
        None => "<no geometry>",
    }
}
