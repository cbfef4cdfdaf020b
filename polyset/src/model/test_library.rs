use geojson::{Geometry, PolygonType, Value};
use polyset_core::geometry::{AreaConvention, GeoLibrary, GeometryError, GeometryLibrary};

/// planar geo library whose containment answers come from a fixed list of
/// (container, contained) pairs instead of the geometry itself.
pub struct ContainsLookup {
    pub pairs: Vec<(Geometry, Geometry)>,
}

impl ContainsLookup {
    pub fn new(pairs: Vec<(PolygonType, PolygonType)>) -> ContainsLookup {
        let pairs = pairs
            .into_iter()
            .map(|(a, b)| {
                (
                    Geometry::new(Value::Polygon(a)),
                    Geometry::new(Value::Polygon(b)),
                )
            })
            .collect();
        ContainsLookup { pairs }
    }
}

impl GeometryLibrary for ContainsLookup {
    fn area(&self, polygon: &PolygonType) -> Result<f64, GeometryError> {
        planar().area(polygon)
    }

    fn overlaps(&self, a: &Geometry, b: &Geometry) -> Result<bool, GeometryError> {
        planar().overlaps(a, b)
    }

    fn contains(&self, a: &Geometry, b: &Geometry) -> Result<bool, GeometryError> {
        Ok(self.pairs.iter().any(|(x, y)| x == a && y == b))
    }

    fn union(&self, a: &PolygonType, b: &PolygonType) -> Result<Option<Geometry>, GeometryError> {
        planar().union(a, b)
    }

    fn intersect(
        &self,
        a: &PolygonType,
        b: &PolygonType,
    ) -> Result<Option<Geometry>, GeometryError> {
        planar().intersect(a, b)
    }
}

pub fn planar() -> GeoLibrary {
    GeoLibrary::new(AreaConvention::Planar)
}

/// closed ring from a list of (x, y) pairs, as a single-ring polygon
pub fn rings(coords: &[(f64, f64)]) -> PolygonType {
    vec![coords.iter().map(|(x, y)| vec![*x, *y]).collect()]
}

/// axis-aligned square polygon
pub fn square(x: f64, y: f64, size: f64) -> PolygonType {
    rings(&[
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ])
}
