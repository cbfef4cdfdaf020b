use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("position {position} of ring {ring} has {found} ordinate(s), expected at least 2")]
    InvalidPosition {
        ring: usize,
        position: usize,
        found: usize,
    },
    #[error("polygon has no exterior ring")]
    EmptyPolygon,
    #[error("geometry type '{0}' is not supported here, must be Polygon or MultiPolygon")]
    UnsupportedGeometry(String),
}
