use super::PolysetAppError;
use crate::model::feature::Solution;
use geojson::GeoJson;
use std::str::FromStr;

/// reads one solution from a GeoJSON FeatureCollection file
pub fn read_solution(filepath: &str) -> Result<Solution, PolysetAppError> {
    let contents = read_file(filepath)?;
    let dataset = GeoJson::from_str(&contents).map_err(|e| PolysetAppError::GeoJsonError {
        filepath: filepath.to_string(),
        source: e,
    })?;
    let found = match dataset {
        GeoJson::FeatureCollection(feature_collection) => return Ok(feature_collection),
        GeoJson::Geometry(_) => "Geometry",
        GeoJson::Feature(_) => "Feature",
    };
    Err(PolysetAppError::UnexpectedGeoJson {
        filepath: filepath.to_string(),
        expected: String::from("FeatureCollection"),
        found: String::from(found),
    })
}

/// reads each file as a solution, keeping the file order
pub fn read_solutions(filepaths: &[String]) -> Result<Vec<Solution>, PolysetAppError> {
    let solutions = filepaths
        .iter()
        .map(|f| read_solution(f))
        .collect::<Result<Vec<_>, _>>()?;
    let n_features: usize = solutions.iter().map(|s| s.features.len()).sum();
    log::info!(
        "read {} solution(s) with {} polygon(s) in total",
        solutions.len(),
        n_features
    );
    Ok(solutions)
}

/// reads the geometry to reconcile into a solution. the file may hold a bare
/// geometry object or a Feature wrapping one. the geometry is returned as
/// plain JSON so that its type tag is validated during reconciliation.
///
/// # Returns
///
/// * the geometry object, or None for a Feature without geometry
pub fn read_geometry(filepath: &str) -> Result<Option<serde_json::Value>, PolysetAppError> {
    let contents = read_file(filepath)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    match value.get("type").and_then(|t| t.as_str()) {
        Some("Feature") => Ok(value
            .get("geometry")
            .filter(|g| !g.is_null())
            .cloned()),
        Some("FeatureCollection") => Err(PolysetAppError::UnexpectedGeoJson {
            filepath: filepath.to_string(),
            expected: String::from("geometry or Feature"),
            found: String::from("FeatureCollection"),
        }),
        _ => Ok(Some(value)),
    }
}

/// writes a solution as a GeoJSON FeatureCollection
pub fn write_solution(filepath: &str, solution: &Solution) -> Result<(), PolysetAppError> {
    let contents = serde_json::to_string_pretty(solution)?;
    std::fs::write(filepath, contents).map_err(|e| PolysetAppError::WriteError {
        filepath: filepath.to_string(),
        source: e,
    })?;
    log::info!(
        "wrote solution with {} polygon(s) to {filepath}",
        solution.features.len()
    );
    Ok(())
}

fn read_file(filepath: &str) -> Result<String, PolysetAppError> {
    std::fs::read_to_string(filepath).map_err(|e| PolysetAppError::ReadError {
        filepath: filepath.to_string(),
        source: e,
    })
}
