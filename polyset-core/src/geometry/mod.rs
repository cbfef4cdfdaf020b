mod area_convention;
mod geo_library;
mod geometry_error;
mod geometry_library;

pub use area_convention::AreaConvention;
pub use geo_library::GeoLibrary;
pub use geometry_error::GeometryError;
pub use geometry_library::GeometryLibrary;
