use polyset_core::geometry::GeometryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconcileError {
    #[error("no geometry was computed to replace the selected polygons")]
    MissingGeometry,
    #[error("invalid geometry type '{0}', must be Polygon or MultiPolygon")]
    InvalidGeometryType(String),
    #[error("solution index {index} is out of bounds for {count} solution(s)")]
    SolutionIndexOutOfBounds { index: usize, count: usize },
    #[error("failure ordering polygons by containment: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },
}
