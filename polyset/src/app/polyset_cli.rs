use super::{run, PolysetAppError};
use crate::model::store::PolygonOperation;
use clap::{Args, Parser, Subcommand};
use polyset_core::geometry::AreaConvention;

/// command line tool for inspecting and editing sets of alternative polygon
/// solutions stored as GeoJSON FeatureCollections
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PolysetCliArguments {
    /// select the polyset operation to run
    #[command(subcommand)]
    pub op: PolysetOperation,
}

/// arguments that load the solutions and set up the selection
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArguments {
    /// TOML configuration file
    #[arg(short, long = "config")]
    pub config_file: Option<String>,
    /// GeoJSON FeatureCollection holding one solution. repeat the flag to
    /// load several solutions. replaces the configured solution files.
    #[arg(long = "solution-file")]
    pub solution_files: Vec<String>,
    /// index of the active solution
    #[arg(short, long, default_value_t = 0)]
    pub solution: usize,
    /// index of a polygon in the active solution to select. repeat the flag
    /// to select a pair. selecting an index twice deselects it.
    #[arg(long = "select")]
    pub selected: Vec<usize>,
    /// area convention, overrides the configuration
    #[arg(long, value_enum)]
    pub area_convention: Option<AreaConvention>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PolysetOperation {
    /// prints statistics for the selected polygons as JSON
    Stats {
        #[command(flatten)]
        session: SessionArguments,
    },
    /// replaces the two selected polygons with their union and writes
    /// the active solution
    Union {
        #[command(flatten)]
        session: SessionArguments,
        /// output GeoJSON file, overrides the configuration
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// replaces the two selected polygons with their intersection and
    /// writes the active solution
    Intersection {
        #[command(flatten)]
        session: SessionArguments,
        /// output GeoJSON file, overrides the configuration
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// replaces the selected polygons with a Polygon or MultiPolygon read
    /// from a GeoJSON file and writes the active solution
    Reconcile {
        #[command(flatten)]
        session: SessionArguments,
        /// GeoJSON file holding a geometry, or a Feature with a geometry
        #[arg(short, long)]
        geometry_file: String,
        /// output GeoJSON file, overrides the configuration
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// prints the center of the bounding box of the active solution
    Center {
        #[command(flatten)]
        session: SessionArguments,
    },
}

impl PolysetOperation {
    pub fn run(&self) -> Result<(), PolysetAppError> {
        match self {
            PolysetOperation::Stats { session } => {
                let stats = run::statistics(session)?;
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            PolysetOperation::Union {
                session,
                output_file,
            } => {
                run::polygon_operation(session, PolygonOperation::Union, output_file.as_deref())?;
            }
            PolysetOperation::Intersection {
                session,
                output_file,
            } => {
                run::polygon_operation(
                    session,
                    PolygonOperation::Intersection,
                    output_file.as_deref(),
                )?;
            }
            PolysetOperation::Reconcile {
                session,
                geometry_file,
                output_file,
            } => {
                run::reconcile_file(session, geometry_file, output_file.as_deref())?;
            }
            PolysetOperation::Center { session } => {
                let center = run::center(session)?;
                println!("{}", serde_json::to_string_pretty(&center)?);
            }
        }
        Ok(())
    }
}
