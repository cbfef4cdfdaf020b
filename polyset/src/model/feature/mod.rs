pub mod feature_ops;

/// an ordered collection of polygon features. order is draw order: later
/// features are drawn on top of earlier ones.
pub type Solution = geojson::FeatureCollection;
