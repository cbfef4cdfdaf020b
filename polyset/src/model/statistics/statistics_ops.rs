use super::StatisticsError;
use crate::model::feature::feature_ops;
use crate::model::selection::MAX_SELECTED_POLYGONS;
use geojson::{Feature, Geometry, PolygonType, Value};
use polyset_core::geometry::GeometryLibrary;
use polyset_core::util::geo_utils;

/// area of a polygon feature
pub fn area<L>(library: &L, feature: &Feature) -> Result<f64, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    Ok(library.area(polygon_rings(feature)?)?)
}

/// sum of the areas of the selected features. overlapping parts are counted
/// once per feature.
pub fn stacked_area<L>(
    library: &L,
    features: &[Feature],
    indices: &[usize],
) -> Result<f64, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    indices
        .iter()
        .try_fold(0.0, |acc, idx| -> Result<f64, StatisticsError> {
            let feature = feature_at(features, *idx)?;
            Ok(acc + area(library, feature)?)
        })
}

pub fn overlaps<L>(library: &L, a: &Feature, b: &Feature) -> Result<bool, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    Ok(library.overlaps(polygon_geometry(a)?, polygon_geometry(b)?)?)
}

/// true if `a` contains `b`
pub fn contains<L>(library: &L, a: &Feature, b: &Feature) -> Result<bool, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    Ok(library.contains(polygon_geometry(a)?, polygon_geometry(b)?)?)
}

/// area of the union of two polygons, or NaN when they neither overlap nor
/// contain one another
pub fn union_area<L>(library: &L, a: &Feature, b: &Feature) -> Result<f64, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    if !is_related(library, a, b)? {
        return Ok(f64::NAN);
    }
    let union = library.union(polygon_rings(a)?, polygon_rings(b)?)?;
    resulting_area(library, union.as_ref())
}

/// area of the intersection of two polygons, or NaN when they neither
/// overlap nor contain one another
pub fn intersection_area<L>(library: &L, a: &Feature, b: &Feature) -> Result<f64, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    if !is_related(library, a, b)? {
        return Ok(f64::NAN);
    }
    let intersection = library.intersect(polygon_rings(a)?, polygon_rings(b)?)?;
    resulting_area(library, intersection.as_ref())
}

/// true if the polygons overlap or either one contains the other
pub fn is_related<L>(library: &L, a: &Feature, b: &Feature) -> Result<bool, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    Ok(overlaps(library, a, b)? || contains(library, a, b)? || contains(library, b, a)?)
}

/// area of a union or intersection result. a missing result has NaN area,
/// a MultiPolygon is the sum of its disjoint parts.
pub fn resulting_area<L>(library: &L, geometry: Option<&Geometry>) -> Result<f64, StatisticsError>
where
    L: GeometryLibrary + ?Sized,
{
    match geometry.map(|g| &g.value) {
        None => Ok(f64::NAN),
        Some(Value::Polygon(rings)) => Ok(library.area(rings)?),
        Some(Value::MultiPolygon(parts)) => {
            parts
                .iter()
                .try_fold(0.0, |acc, rings| -> Result<f64, StatisticsError> {
                    Ok(acc + library.area(rings)?)
                })
        }
        Some(other) => Err(StatisticsError::InvalidPolygon(String::from(
            geo_utils::geometry_type_name(other),
        ))),
    }
}

/// the selected polygon features, in selection order
///
/// # Returns
///
/// * the features, or an error if too many are selected, an index is out of
///   bounds, or a selected feature is not a Polygon
pub fn selected_polygons<'a>(
    features: &'a [Feature],
    indices: &[usize],
) -> Result<Vec<&'a Feature>, StatisticsError> {
    if indices.len() > MAX_SELECTED_POLYGONS {
        return Err(StatisticsError::TooManySelected {
            selected: indices.len(),
            max: MAX_SELECTED_POLYGONS,
        });
    }
    indices
        .iter()
        .map(|idx| -> Result<&'a Feature, StatisticsError> {
            let feature = feature_at(features, *idx)?;
            polygon_rings(feature)?;
            Ok(feature)
        })
        .collect()
}

pub fn feature_at(features: &[Feature], index: usize) -> Result<&Feature, StatisticsError> {
    features
        .get(index)
        .ok_or(StatisticsError::IndexOutOfBounds {
            index,
            count: features.len(),
        })
}

/// the rings of a Polygon feature
pub fn polygon_rings(feature: &Feature) -> Result<&PolygonType, StatisticsError> {
    feature_ops::polygon_rings(feature).ok_or_else(|| {
        StatisticsError::InvalidPolygon(String::from(feature_ops::geometry_type(feature)))
    })
}

fn polygon_geometry(feature: &Feature) -> Result<&Geometry, StatisticsError> {
    match &feature.geometry {
        Some(g) if matches!(g.value, Value::Polygon(_)) => Ok(g),
        _ => Err(StatisticsError::InvalidPolygon(String::from(
            feature_ops::geometry_type(feature),
        ))),
    }
}
