use std::fmt::Display;

use clap::ValueEnum;
use geo::{Area, ChamberlainDuquetteArea, GeodesicArea, Polygon};
use serde::{Deserialize, Serialize};

/// how polygon area is measured. coordinates are assumed to be WGS84
/// longitude/latitude for the spherical and geodesic conventions.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AreaConvention {
    /// spherical approximation in square meters, the convention of most web mapping tools
    #[default]
    ChamberlainDuquette,
    /// ellipsoidal area in square meters
    Geodesic,
    /// cartesian area in squared coordinate units
    Planar,
}

impl AreaConvention {
    pub fn unsigned_area(&self, polygon: &Polygon<f64>) -> f64 {
        match self {
            AreaConvention::ChamberlainDuquette => polygon.chamberlain_duquette_unsigned_area(),
            AreaConvention::Geodesic => polygon.geodesic_area_unsigned(),
            AreaConvention::Planar => polygon.unsigned_area(),
        }
    }
}

impl Display for AreaConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaConvention::ChamberlainDuquette => write!(f, "chamberlain_duquette"),
            AreaConvention::Geodesic => write!(f, "geodesic"),
            AreaConvention::Planar => write!(f, "planar"),
        }
    }
}
