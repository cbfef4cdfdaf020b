use super::PolygonOperation;
use crate::model::{reconcile::ReconcileError, statistics::StatisticsError};
use polyset_core::geometry::GeometryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("at least one solution is required")]
    NoSolutions,
    #[error("solution index {index} is out of bounds for {count} solution(s)")]
    SolutionIndexOutOfBounds { index: usize, count: usize },
    #[error("polygon index {index} is out of bounds for {count} feature(s) in the active solution")]
    PolygonIndexOutOfBounds { index: usize, count: usize },
    #[error("{operation} requires exactly 2 selected polygons, found {selected}")]
    SelectionRequired {
        operation: PolygonOperation,
        selected: usize,
    },
    #[error("failure replacing selected polygons: {source}")]
    Reconcile {
        #[from]
        source: ReconcileError,
    },
    #[error("failure computing statistics: {source}")]
    Statistics {
        #[from]
        source: StatisticsError,
    },
    #[error("geometry library failure: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },
}
