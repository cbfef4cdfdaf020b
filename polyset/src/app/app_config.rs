use super::PolysetAppError;
use config::Config;
use polyset_core::geometry::{AreaConvention, GeoLibrary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// run configuration for the polyset command line tool, read from TOML
///
/// # Example
///
/// ```toml
/// solution_files = ["solution-1.json", "solution-2.json"]
/// area_convention = "chamberlain_duquette"
/// output_file = "solution-out.json"
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct PolysetAppConfig {
    /// GeoJSON FeatureCollection files, one per solution
    #[serde(default)]
    pub solution_files: Vec<String>,
    #[serde(default)]
    pub area_convention: AreaConvention,
    /// where union, intersection and reconcile write the active solution
    #[serde(default)]
    pub output_file: Option<String>,
}

impl PolysetAppConfig {
    pub fn geometry_library(&self) -> GeoLibrary {
        GeoLibrary::new(self.area_convention)
    }
}

impl TryFrom<&Path> for PolysetAppConfig {
    type Error = PolysetAppError;

    fn try_from(filepath: &Path) -> Result<Self, Self::Error> {
        let filepath_str = filepath.to_string_lossy();
        let config_file = config::File::new(&filepath_str, config::FileFormat::Toml);
        let config = Config::builder()
            .add_source(config_file)
            .build()
            .map_err(|e| PolysetAppError::ConfigReadError {
                msg: format!("failed reading '{filepath_str}'"),
                source: e,
            })?;
        config
            .try_deserialize::<PolysetAppConfig>()
            .map_err(|e| PolysetAppError::ConfigReadError {
                msg: format!("failed decoding '{filepath_str}' as polyset configuration"),
                source: e,
            })
    }
}
