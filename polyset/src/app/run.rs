use super::{solution_io, PolysetAppConfig, PolysetAppError, SessionArguments};
use crate::model::{
    statistics::SelectionStatistics,
    store::{PolygonOperation, SolutionStore},
};
use polyset_core::geometry::GeoLibrary;
use serde::Serialize;
use std::path::Path;

/// solutions loaded from disk with the requested active solution and selection
pub struct Session {
    pub config: PolysetAppConfig,
    pub library: GeoLibrary,
    pub store: SolutionStore,
}

/// center of the active solution, as longitude and latitude
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub lng: f64,
    pub lat: f64,
}

/// loads the configuration and solutions, then applies the active solution
/// and selection arguments. command line arguments take precedence over the
/// configuration file.
pub fn open_session(args: &SessionArguments) -> Result<Session, PolysetAppError> {
    let mut config = match &args.config_file {
        Some(config_file) => {
            log::info!("reading configuration from {config_file}");
            PolysetAppConfig::try_from(Path::new(config_file))?
        }
        None => PolysetAppConfig::default(),
    };
    if !args.solution_files.is_empty() {
        config.solution_files = args.solution_files.clone();
    }
    if let Some(area_convention) = args.area_convention {
        config.area_convention = area_convention;
    }
    if config.solution_files.is_empty() {
        return Err(PolysetAppError::NoSolutionFiles);
    }

    let solutions = solution_io::read_solutions(&config.solution_files)?;
    let mut store = SolutionStore::new(solutions)?;
    store.set_active(args.solution)?;
    for index in args.selected.iter() {
        store.select(*index)?;
    }
    log::debug!(
        "session on solution {} with selection {:?}, areas by {}",
        store.active_index(),
        store.selection().indices(),
        config.area_convention
    );
    let library = config.geometry_library();
    Ok(Session {
        config,
        library,
        store,
    })
}

pub fn statistics(args: &SessionArguments) -> Result<SelectionStatistics, PolysetAppError> {
    let session = open_session(args)?;
    let stats = session.store.statistics(&session.library)?;
    Ok(stats)
}

pub fn center(args: &SessionArguments) -> Result<Option<Center>, PolysetAppError> {
    let session = open_session(args)?;
    let center = session.store.center().map(|p| Center {
        lng: p.x(),
        lat: p.y(),
    });
    Ok(center)
}

/// runs a union or intersection on the selected pair and writes the active
/// solution
///
/// # Returns
///
/// * the path of the written solution
pub fn polygon_operation(
    args: &SessionArguments,
    operation: PolygonOperation,
    output_file: Option<&str>,
) -> Result<String, PolysetAppError> {
    let mut session = open_session(args)?;
    let output_file = resolve_output_file(&session.config, output_file)?;
    let start_time = chrono::Local::now();
    session.store.apply(&session.library, operation)?;
    log::info!(
        "{operation} finished in {} ms",
        (chrono::Local::now() - start_time).num_milliseconds()
    );
    solution_io::write_solution(&output_file, session.store.active_solution())?;
    Ok(output_file)
}

/// replaces the selection with the geometry in `geometry_file` and writes
/// the active solution
///
/// # Returns
///
/// * the path of the written solution
pub fn reconcile_file(
    args: &SessionArguments,
    geometry_file: &str,
    output_file: Option<&str>,
) -> Result<String, PolysetAppError> {
    let mut session = open_session(args)?;
    let output_file = resolve_output_file(&session.config, output_file)?;
    let geometry = solution_io::read_geometry(geometry_file)?;
    session
        .store
        .replace_selected(&session.library, geometry.as_ref())?;
    solution_io::write_solution(&output_file, session.store.active_solution())?;
    Ok(output_file)
}

fn resolve_output_file(
    config: &PolysetAppConfig,
    output_file: Option<&str>,
) -> Result<String, PolysetAppError> {
    output_file
        .map(String::from)
        .or_else(|| config.output_file.clone())
        .ok_or(PolysetAppError::NoOutputFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{reconcile::ReconcileError, store::StoreError};
    use polyset_core::geometry::AreaConvention;
    use std::path::PathBuf;

    fn resource(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("resources")
            .join(name)
            .to_string_lossy()
            .to_string()
    }

    fn session_args(selected: Vec<usize>) -> SessionArguments {
        SessionArguments {
            solution_files: vec![resource("solution-1.json"), resource("solution-2.json")],
            selected,
            ..Default::default()
        }
    }

    #[test]
    fn test_statistics_of_overlapping_parcels() {
        let stats = statistics(&session_args(vec![0, 1])).expect("test failed");
        assert!(stats.polygons_overlap);
        assert!(!stats.polygons_contained);
        assert!(stats.union_area < stats.stacked_area);
        assert!(stats.intersection_area > 0.0);
        let combined = stats.union_area + stats.intersection_area;
        assert!((combined - stats.stacked_area).abs() < 1e-6 * stats.stacked_area);
    }

    #[test]
    fn test_statistics_of_disjoint_parcels() {
        let stats = statistics(&session_args(vec![0, 2])).expect("test failed");
        assert!(!stats.is_pair_related());
        assert!(stats.union_area.is_nan());
        assert!(stats.stacked_area > 0.0);
    }

    #[test]
    fn test_planar_override() {
        let mut args = session_args(vec![2]);
        args.area_convention = Some(AreaConvention::Planar);
        let stats = statistics(&args).expect("test failed");
        assert!((stats.stacked_area - 0.0001).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_on_second_solution() {
        let mut args = session_args(vec![0, 1]);
        args.solution = 1;
        let stats = statistics(&args).expect("test failed");
        assert!(stats.polygons_contained);
        assert!(!stats.polygons_overlap);
    }

    #[test]
    fn test_no_solution_files() {
        let result = statistics(&SessionArguments::default());
        assert!(matches!(result, Err(PolysetAppError::NoSolutionFiles)));
    }

    #[test]
    fn test_config_file_provides_solutions() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let config_path = dir.path().join("polyset.toml");
        let contents = format!(
            "solution_files = [\"{}\"]\narea_convention = \"planar\"\n",
            resource("solution-2.json")
        );
        std::fs::write(&config_path, contents).expect("test invariant failed");
        let args = SessionArguments {
            config_file: Some(config_path.to_string_lossy().to_string()),
            selected: vec![0],
            ..Default::default()
        };
        let session = open_session(&args).expect("test failed");
        assert_eq!(session.config.area_convention, AreaConvention::Planar);
        assert_eq!(session.store.solutions().len(), 1);
        assert_eq!(session.store.selection().indices(), vec![0]);
    }

    #[test]
    fn test_selection_out_of_bounds() {
        let result = statistics(&session_args(vec![7]));
        assert!(matches!(
            result,
            Err(PolysetAppError::StoreError {
                source: StoreError::PolygonIndexOutOfBounds { index: 7, count: 3 }
            })
        ));
    }

    #[test]
    fn test_center_of_first_solution() {
        let center = center(&session_args(vec![]))
            .expect("test failed")
            .expect("test failed");
        assert!((center.lng - -104.98).abs() < 1e-9);
        assert!((center.lat - 39.7275).abs() < 1e-9);
    }

    #[test]
    fn test_union_writes_active_solution() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let output = dir.path().join("union.json").to_string_lossy().to_string();
        let written = polygon_operation(
            &session_args(vec![0, 1]),
            PolygonOperation::Union,
            Some(&output),
        )
        .expect("test failed");
        assert_eq!(written, output);
        let solution = solution_io::read_solution(&output).expect("test failed");
        assert_eq!(solution.features.len(), 2);
    }

    #[test]
    fn test_operation_requires_output_file() {
        let result = polygon_operation(&session_args(vec![0, 1]), PolygonOperation::Union, None);
        assert!(matches!(result, Err(PolysetAppError::NoOutputFile)));
    }

    #[test]
    fn test_reconcile_file_with_point_is_rejected() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let geometry_path = dir.path().join("point.json");
        let output = dir.path().join("out.json").to_string_lossy().to_string();
        std::fs::write(
            &geometry_path,
            r#"{"type": "Point", "coordinates": [-104.99, 39.74]}"#,
        )
        .expect("test invariant failed");
        let result = reconcile_file(
            &session_args(vec![0]),
            &geometry_path.to_string_lossy(),
            Some(&output),
        );
        assert!(matches!(
            result,
            Err(PolysetAppError::StoreError {
                source: StoreError::Reconcile {
                    source: ReconcileError::InvalidGeometryType(_)
                }
            })
        ));
        assert!(!Path::new(&output).exists());
    }

    #[test]
    fn test_reconcile_file_replaces_selection() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let geometry_path = dir.path().join("parcel.json");
        let output = dir.path().join("out.json").to_string_lossy().to_string();
        std::fs::write(
            &geometry_path,
            r#"{"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": [[[-104.95, 39.70], [-104.94, 39.70], [-104.94, 39.71], [-104.95, 39.71], [-104.95, 39.70]]]}}"#,
        )
        .expect("test invariant failed");
        reconcile_file(
            &session_args(vec![2]),
            &geometry_path.to_string_lossy(),
            Some(&output),
        )
        .expect("test failed");
        let solution = solution_io::read_solution(&output).expect("test failed");
        assert_eq!(solution.features.len(), 3);
        assert_eq!(
            solution.features[2].properties,
            Some(serde_json::Map::new())
        );
    }
}
