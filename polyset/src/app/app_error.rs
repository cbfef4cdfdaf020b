use crate::model::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolysetAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed to read '{filepath}' as GeoJSON: {source}")]
    GeoJsonError {
        filepath: String,
        source: geojson::Error,
    },
    #[error("'{filepath}' must contain a GeoJSON {expected}, found {found}")]
    UnexpectedGeoJson {
        filepath: String,
        expected: String,
        found: String,
    },
    #[error("no solution files given, use --solution-file or set 'solution_files' in the configuration")]
    NoSolutionFiles,
    #[error("no output file given, use --output-file or set 'output_file' in the configuration")]
    NoOutputFile,
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{source}")]
    StoreError {
        #[from]
        source: StoreError,
    },
}
