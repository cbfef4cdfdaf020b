use super::{containment_order, ReconcileError, ReconcileGeometry};
use crate::model::feature::Solution;
use itertools::Itertools;
use polyset_core::geometry::GeometryLibrary;

/// replaces the selected features of the active solution with the parts of a
/// newly computed geometry.
///
/// the selected features are removed by their index in the solution as it
/// was passed in, the parts of `new_geometry` are appended with empty
/// properties, and the resulting features are put in containment order (see
/// [`containment_order`]). the input solutions are never modified; the
/// result is a copy where only the active solution differs.
///
/// # Arguments
///
/// * `library` - geometry library used for the containment predicate
/// * `new_geometry` - the computed geometry, usually a union or intersection
/// * `selected_indices` - feature indices in the active solution to replace
/// * `active_solution_index` - solution to modify
/// * `solutions` - current solutions collection
///
/// # Returns
///
/// * the new solutions collection, or an error with no result at all
pub fn reconcile<L, G>(
    library: &L,
    new_geometry: Option<G>,
    selected_indices: &[usize],
    active_solution_index: usize,
    solutions: &[Solution],
) -> Result<Vec<Solution>, ReconcileError>
where
    L: GeometryLibrary + ?Sized,
    G: TryInto<ReconcileGeometry, Error = ReconcileError>,
{
    let new_geometry: ReconcileGeometry = new_geometry
        .ok_or(ReconcileError::MissingGeometry)?
        .try_into()?;
    let active = solutions.get(active_solution_index).ok_or(
        ReconcileError::SolutionIndexOutOfBounds {
            index: active_solution_index,
            count: solutions.len(),
        },
    )?;

    let stale = selected_indices
        .iter()
        .filter(|&&idx| idx >= active.features.len())
        .collect_vec();
    if !stale.is_empty() {
        log::debug!(
            "ignoring selected indices {:?} beyond the {} features of solution {}",
            stale,
            active.features.len(),
            active_solution_index
        );
    }

    let mut features = active
        .features
        .iter()
        .enumerate()
        .filter(|(idx, _)| !selected_indices.contains(idx))
        .map(|(_, feature)| feature.clone())
        .collect_vec();
    let n_removed = active.features.len() - features.len();
    let n_added = new_geometry.part_count();
    features.extend(new_geometry.into_features());
    let features = containment_order(library, features)?;

    log::debug!(
        "solution {active_solution_index}: removed {n_removed} feature(s), added {n_added}, now {}",
        features.len()
    );

    let mut new_solutions = solutions.to_vec();
    new_solutions[active_solution_index] = Solution {
        features,
        ..active.clone()
    };
    Ok(new_solutions)
}
