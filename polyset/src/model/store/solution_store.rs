use super::{PolygonOperation, StoreError};
use crate::model::{
    feature::Solution,
    reconcile::{self, ReconcileError, ReconcileGeometry},
    selection::Selection,
    statistics::{statistics_ops, SelectionStatistics},
};
use polyset_core::{geometry::GeometryLibrary, util::geo_utils};

/// owns the solutions collection, the active solution index and the polygon
/// selection. every mutation goes through `&mut self`, and the selection is
/// cleared whenever the features it points into may have changed, so no
/// reader can observe a selection that is out of bounds.
#[derive(Debug, Clone)]
pub struct SolutionStore {
    solutions: Vec<Solution>,
    active_index: usize,
    selection: Selection,
}

impl SolutionStore {
    pub fn new(solutions: Vec<Solution>) -> Result<SolutionStore, StoreError> {
        if solutions.is_empty() {
            return Err(StoreError::NoSolutions);
        }
        Ok(SolutionStore {
            solutions,
            active_index: 0,
            selection: Selection::new(),
        })
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_solution(&self) -> &Solution {
        &self.solutions[self.active_index]
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// switches the active solution and clears the selection
    pub fn set_active(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.solutions.len() {
            return Err(StoreError::SolutionIndexOutOfBounds {
                index,
                count: self.solutions.len(),
            });
        }
        if index != self.active_index {
            log::debug!("active solution {} -> {}", self.active_index, index);
        }
        self.active_index = index;
        self.selection.clear();
        Ok(())
    }

    /// toggles a polygon of the active solution in the selection, evicting
    /// the oldest selected polygon when the selection is full
    ///
    /// # Returns
    ///
    /// * true if the polygon is selected afterward
    pub fn select(&mut self, index: usize) -> Result<bool, StoreError> {
        let count = self.active_solution().features.len();
        if index >= count {
            return Err(StoreError::PolygonIndexOutOfBounds { index, count });
        }
        Ok(self.selection.toggle(index))
    }

    pub fn statistics<L>(&self, library: &L) -> Result<SelectionStatistics, StoreError>
    where
        L: GeometryLibrary + ?Sized,
    {
        let stats = SelectionStatistics::compute(
            library,
            &self.active_solution().features,
            &self.selection.indices(),
        )?;
        Ok(stats)
    }

    /// center of the bounding box of the active solution's polygons
    pub fn center(&self) -> Option<geo::Point<f64>> {
        geo_utils::bounding_center(&self.active_solution().features)
    }

    /// adopts a new solutions collection. the selection is cleared first and
    /// the active index is clamped into the new collection.
    pub fn commit(&mut self, solutions: Vec<Solution>) -> Result<(), StoreError> {
        if solutions.is_empty() {
            return Err(StoreError::NoSolutions);
        }
        self.selection.clear();
        if self.active_index >= solutions.len() {
            log::warn!(
                "active solution {} no longer exists, using solution {}",
                self.active_index,
                solutions.len() - 1
            );
            self.active_index = solutions.len() - 1;
        }
        self.solutions = solutions;
        Ok(())
    }

    /// replaces the selected polygons of the active solution with the parts
    /// of `new_geometry` and commits the result. on failure nothing changes.
    pub fn replace_selected<L, G>(
        &mut self,
        library: &L,
        new_geometry: Option<G>,
    ) -> Result<(), StoreError>
    where
        L: GeometryLibrary + ?Sized,
        G: TryInto<ReconcileGeometry, Error = ReconcileError>,
    {
        let selected = self.selection.indices();
        let solutions = reconcile::reconcile(
            library,
            new_geometry,
            &selected,
            self.active_index,
            &self.solutions,
        )?;
        self.commit(solutions)?;
        log::info!(
            "replaced polygons {:?} of solution {}, now {} polygon(s)",
            selected,
            self.active_index,
            self.active_solution().features.len()
        );
        Ok(())
    }

    /// combines the two selected polygons with `operation` and replaces them
    /// with the result
    pub fn apply<L>(&mut self, library: &L, operation: PolygonOperation) -> Result<(), StoreError>
    where
        L: GeometryLibrary + ?Sized,
    {
        let selected = self.selection.indices();
        let [a, b] = selected.as_slice() else {
            return Err(StoreError::SelectionRequired {
                operation,
                selected: selected.len(),
            });
        };
        let features = &self.active_solution().features;
        let a_rings = statistics_ops::feature_at(features, *a).and_then(statistics_ops::polygon_rings)?;
        let b_rings = statistics_ops::feature_at(features, *b).and_then(statistics_ops::polygon_rings)?;
        let geometry = operation.compute(library, a_rings, b_rings)?;
        log::info!("computed {operation} of polygons {a} and {b}");
        self.replace_selected(library, geometry.as_ref())
    }
}
