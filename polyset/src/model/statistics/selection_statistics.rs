use super::{statistics_ops as ops, StatisticsError};
use geojson::Feature;
use polyset_core::geometry::GeometryLibrary;
use serde::Serialize;

/// derived quantities for the polygons selected in the active solution.
///
/// `union_area` and `intersection_area` are NaN (serialized as `null`) unless
/// exactly two polygons are selected and they overlap or one contains the
/// other. NaN means "not applicable", which is different from a zero area.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SelectionStatistics {
    pub selected: Vec<usize>,
    pub individual_areas: Vec<f64>,
    pub stacked_area: f64,
    pub polygons_overlap: bool,
    pub polygons_contained: bool,
    pub union_area: f64,
    pub intersection_area: f64,
}

impl SelectionStatistics {
    /// computes statistics for the selected features
    ///
    /// # Arguments
    ///
    /// * `library` - geometry library used for all areas and predicates
    /// * `features` - features of the active solution
    /// * `indices` - selected feature indices, at most two
    pub fn compute<L>(
        library: &L,
        features: &[Feature],
        indices: &[usize],
    ) -> Result<SelectionStatistics, StatisticsError>
    where
        L: GeometryLibrary + ?Sized,
    {
        let polygons = ops::selected_polygons(features, indices)?;
        let individual_areas = polygons
            .iter()
            .map(|f| ops::area(library, f))
            .collect::<Result<Vec<_>, _>>()?;

        let mut stats = SelectionStatistics {
            selected: indices.to_vec(),
            individual_areas,
            stacked_area: ops::stacked_area(library, features, indices)?,
            polygons_overlap: false,
            polygons_contained: false,
            union_area: f64::NAN,
            intersection_area: f64::NAN,
        };

        let [a, b] = polygons.as_slice() else {
            return Ok(stats);
        };
        stats.polygons_overlap = ops::overlaps(library, a, b)?;
        stats.polygons_contained = ops::contains(library, a, b)? || ops::contains(library, b, a)?;
        stats.union_area = ops::union_area(library, a, b)?;
        stats.intersection_area = ops::intersection_area(library, a, b)?;
        log::debug!(
            "statistics for selection {:?}: overlap={}, contained={}",
            stats.selected,
            stats.polygons_overlap,
            stats.polygons_contained
        );
        Ok(stats)
    }

    /// true when two polygons are selected that overlap or contain one another
    pub fn is_pair_related(&self) -> bool {
        self.polygons_overlap || self.polygons_contained
    }
}
