use super::ReconcileError;
use crate::model::feature::feature_ops;
use geojson::{Feature, Geometry, PolygonType, Value};
use polyset_core::util::geo_utils;

/// a computed geometry that can replace selected polygons. union and
/// intersection results are either one polygon or several disjoint parts.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileGeometry {
    Polygon(PolygonType),
    MultiPolygon(Vec<PolygonType>),
}

impl ReconcileGeometry {
    /// number of polygon features this geometry decomposes into
    pub fn part_count(&self) -> usize {
        match self {
            ReconcileGeometry::Polygon(_) => 1,
            ReconcileGeometry::MultiPolygon(parts) => parts.len(),
        }
    }

    /// one feature per polygon part, in the order the parts are stored
    pub fn into_features(self) -> Vec<Feature> {
        match self {
            ReconcileGeometry::Polygon(rings) => vec![feature_ops::polygon_feature(rings)],
            ReconcileGeometry::MultiPolygon(parts) => parts
                .into_iter()
                .map(feature_ops::polygon_feature)
                .collect(),
        }
    }
}

impl TryFrom<&Geometry> for ReconcileGeometry {
    type Error = ReconcileError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        match &geometry.value {
            Value::Polygon(rings) => Ok(ReconcileGeometry::Polygon(rings.clone())),
            Value::MultiPolygon(parts) => Ok(ReconcileGeometry::MultiPolygon(parts.clone())),
            other => Err(ReconcileError::InvalidGeometryType(String::from(
                geo_utils::geometry_type_name(other),
            ))),
        }
    }
}

impl TryFrom<Geometry> for ReconcileGeometry {
    type Error = ReconcileError;

    fn try_from(geometry: Geometry) -> Result<Self, Self::Error> {
        match geometry.value {
            Value::Polygon(rings) => Ok(ReconcileGeometry::Polygon(rings)),
            Value::MultiPolygon(parts) => Ok(ReconcileGeometry::MultiPolygon(parts)),
            other => Err(ReconcileError::InvalidGeometryType(String::from(
                geo_utils::geometry_type_name(&other),
            ))),
        }
    }
}

/// decodes an untyped GeoJSON geometry object. unknown type tags and
/// polygonal geometries with malformed coordinates are both reported as
/// [`ReconcileError::InvalidGeometryType`].
impl TryFrom<&serde_json::Value> for ReconcileGeometry {
    type Error = ReconcileError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let type_tag = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| ReconcileError::InvalidGeometryType(String::from("<missing>")))?;
        match type_tag {
            "Polygon" | "MultiPolygon" => {
                let geometry: Geometry = serde_json::from_value(value.clone()).map_err(|e| {
                    ReconcileError::InvalidGeometryType(format!("{type_tag} ({e})"))
                })?;
                ReconcileGeometry::try_from(geometry)
            }
            other => Err(ReconcileError::InvalidGeometryType(String::from(other))),
        }
    }
}
