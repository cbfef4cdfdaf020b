use crate::geometry::GeometryError;
use geo::{BoundingRect, Coord, LineString, MultiPoint, MultiPolygon, Point, Polygon};
use geojson::{Feature, PolygonType, Value};
use itertools::Itertools;

/// builds a geo polygon from GeoJSON rings. the first ring is the exterior,
/// any further rings are holes. rings are closed by geo if they are open.
///
/// # Arguments
///
/// * `rings` - GeoJSON polygon coordinates
///
/// # Returns
///
/// * the polygon, or an error if there is no exterior ring or a position
///   has fewer than two ordinates
pub fn polygon_from_rings(rings: &PolygonType) -> Result<Polygon<f64>, GeometryError> {
    let mut line_strings = rings
        .iter()
        .enumerate()
        .map(|(ring, positions)| -> Result<LineString<f64>, GeometryError> {
            let coords = positions
                .iter()
                .enumerate()
                .map(|(position, p)| match p.as_slice() {
                    [x, y, ..] => Ok(Coord { x: *x, y: *y }),
                    _ => Err(GeometryError::InvalidPosition {
                        ring,
                        position,
                        found: p.len(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(LineString::new(coords))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if line_strings.is_empty() {
        return Err(GeometryError::EmptyPolygon);
    }
    let exterior = line_strings.remove(0);
    Ok(Polygon::new(exterior, line_strings))
}

/// converts a polygonal GeoJSON geometry into a geo geometry. other geometry
/// types are not accepted since polyset only relates polygons to each other.
pub fn to_polygonal(geometry: &geojson::Geometry) -> Result<geo::Geometry<f64>, GeometryError> {
    match &geometry.value {
        Value::Polygon(rings) => Ok(geo::Geometry::Polygon(polygon_from_rings(rings)?)),
        Value::MultiPolygon(polygons) => {
            let parts = polygons
                .iter()
                .map(polygon_from_rings)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(geo::Geometry::MultiPolygon(MultiPolygon::new(parts)))
        }
        other => Err(GeometryError::UnsupportedGeometry(String::from(
            geometry_type_name(other),
        ))),
    }
}

/// turns the output of a boolean operation back into GeoJSON, collapsing a
/// single-part result into a Polygon. an empty result has no geometry.
pub fn polygonal_to_geojson(multi_polygon: MultiPolygon<f64>) -> Option<geojson::Geometry> {
    let mut parts = multi_polygon.0;
    let value = match parts.len() {
        0 => {
            log::debug!("boolean operation produced no polygons");
            return None;
        }
        1 => Value::from(&parts.remove(0)),
        _ => Value::from(&MultiPolygon::new(parts)),
    };
    Some(geojson::Geometry::new(value))
}

/// the GeoJSON type tag of a geometry value
pub fn geometry_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// center of the bounding box around the exterior rings of all polygon
/// features. features without a polygon geometry are skipped.
///
/// # Returns
///
/// * the center point, or None when there are no usable positions
pub fn bounding_center(features: &[Feature]) -> Option<Point<f64>> {
    let points = features
        .iter()
        .filter_map(|f| match f.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Polygon(rings)) => rings.first(),
            _ => None,
        })
        .flatten()
        .filter_map(|p| match p.as_slice() {
            [x, y, ..] => Some(Point::new(*x, *y)),
            _ => None,
        })
        .collect_vec();
    MultiPoint::new(points)
        .bounding_rect()
        .map(|rect| rect.center().into())
}
