use std::fmt::Display;

use clap::ValueEnum;
use geojson::{Geometry, PolygonType};
use polyset_core::geometry::{GeometryError, GeometryLibrary};
use serde::{Deserialize, Serialize};

/// a boolean operation that combines the two selected polygons
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolygonOperation {
    Union,
    Intersection,
}

impl PolygonOperation {
    pub fn compute<L>(
        &self,
        library: &L,
        a: &PolygonType,
        b: &PolygonType,
    ) -> Result<Option<Geometry>, GeometryError>
    where
        L: GeometryLibrary + ?Sized,
    {
        match self {
            PolygonOperation::Union => library.union(a, b),
            PolygonOperation::Intersection => library.intersect(a, b),
        }
    }
}

impl Display for PolygonOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolygonOperation::Union => write!(f, "union"),
            PolygonOperation::Intersection => write!(f, "intersection"),
        }
    }
}
