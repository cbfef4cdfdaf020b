use polyset_core::geometry::GeometryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("invalid polygon: feature geometry is '{0}', expected Polygon")]
    InvalidPolygon(String),
    #[error("too many polygons selected: {selected} selected, at most {max} may be compared")]
    TooManySelected { selected: usize, max: usize },
    #[error("polygon index {index} is out of bounds for {count} feature(s)")]
    IndexOutOfBounds { index: usize, count: usize },
    #[error("{source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },
}
