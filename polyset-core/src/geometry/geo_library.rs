use super::{AreaConvention, GeometryError, GeometryLibrary};
use crate::util::geo_utils;
use geo::{BooleanOps, Relate};
use geojson::{Geometry, PolygonType};
use serde::{Deserialize, Serialize};

/// [`GeometryLibrary`] backed by the `geo` crate. predicates use the DE-9IM
/// relation between the two shapes, boolean operations use `geo`'s
/// [`BooleanOps`] on polygons.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoLibrary {
    pub area_convention: AreaConvention,
}

impl GeoLibrary {
    pub fn new(area_convention: AreaConvention) -> GeoLibrary {
        GeoLibrary { area_convention }
    }
}

impl GeometryLibrary for GeoLibrary {
    fn area(&self, polygon: &PolygonType) -> Result<f64, GeometryError> {
        let polygon = geo_utils::polygon_from_rings(polygon)?;
        Ok(self.area_convention.unsigned_area(&polygon))
    }

    fn overlaps(&self, a: &Geometry, b: &Geometry) -> Result<bool, GeometryError> {
        let a = geo_utils::to_polygonal(a)?;
        let b = geo_utils::to_polygonal(b)?;
        Ok(a.relate(&b).is_overlaps())
    }

    fn contains(&self, a: &Geometry, b: &Geometry) -> Result<bool, GeometryError> {
        let a = geo_utils::to_polygonal(a)?;
        let b = geo_utils::to_polygonal(b)?;
        Ok(a.relate(&b).is_contains())
    }

    fn union(&self, a: &PolygonType, b: &PolygonType) -> Result<Option<Geometry>, GeometryError> {
        let a = geo_utils::polygon_from_rings(a)?;
        let b = geo_utils::polygon_from_rings(b)?;
        Ok(geo_utils::polygonal_to_geojson(a.union(&b)))
    }

    fn intersect(
        &self,
        a: &PolygonType,
        b: &PolygonType,
    ) -> Result<Option<Geometry>, GeometryError> {
        let a = geo_utils::polygon_from_rings(a)?;
        let b = geo_utils::polygon_from_rings(b)?;
        Ok(geo_utils::polygonal_to_geojson(a.intersection(&b)))
    }
}
