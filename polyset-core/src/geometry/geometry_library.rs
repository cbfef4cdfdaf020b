use super::GeometryError;
use geojson::{Geometry, PolygonType};

/// the computational geometry operations consumed by polyset. polygons are
/// passed as GeoJSON ring sets so that coordinates round-trip exactly; the
/// library decides how to interpret them.
///
/// union and intersection return `None` when the library produces no
/// geometry (for example, the intersection of disjoint polygons). otherwise
/// the result is either a GeoJSON Polygon or MultiPolygon.
pub trait GeometryLibrary {
    /// area of a single polygon, in the unit of the library's area convention
    fn area(&self, polygon: &PolygonType) -> Result<f64, GeometryError>;

    /// true if the interiors of `a` and `b` intersect but neither contains the other
    fn overlaps(&self, a: &Geometry, b: &Geometry) -> Result<bool, GeometryError>;

    /// true if `b` lies entirely within `a`
    fn contains(&self, a: &Geometry, b: &Geometry) -> Result<bool, GeometryError>;

    fn union(&self, a: &PolygonType, b: &PolygonType) -> Result<Option<Geometry>, GeometryError>;

    fn intersect(
        &self,
        a: &PolygonType,
        b: &PolygonType,
    ) -> Result<Option<Geometry>, GeometryError>;
}
