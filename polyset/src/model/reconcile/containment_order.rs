use geojson::{Feature, Geometry, Value};
use polyset_core::geometry::{GeometryError, GeometryLibrary};

/// orders features so that a feature which contains another is placed before
/// it. features that are not related by containment keep their relative
/// order where the containment constraints allow it.
///
/// the result is the topological order of the strict containment relation
/// (`a` contains `b` and `b` does not contain `a`) that, at every step, emits
/// the earliest feature with no unplaced container. mutually containing
/// features (equal shapes) are unordered, and so are features whose geometry
/// is missing or not polygonal. if the library reports a
/// containment cycle, the earliest remaining feature is emitted to break it.
///
/// # Arguments
///
/// * `library` - answers the containment predicate
/// * `features` - features in their current order
///
/// # Returns
///
/// * the reordered features, or the first error raised by the library
pub fn containment_order<L>(library: &L, features: Vec<Feature>) -> Result<Vec<Feature>, GeometryError>
where
    L: GeometryLibrary + ?Sized,
{
    let n = features.len();
    let mut contains = vec![vec![false; n]; n];
    for (i, a) in features.iter().enumerate() {
        for (j, b) in features.iter().enumerate() {
            if i == j {
                continue;
            }
            if let (Some(ga), Some(gb)) = (polygonal(a), polygonal(b)) {
                contains[i][j] = library.contains(ga, gb)?;
            }
        }
    }
    let precedes = |i: usize, j: usize| contains[i][j] && !contains[j][i];

    // containers of each feature that have not been placed yet
    let mut pending = (0..n)
        .map(|j| (0..n).filter(|&i| precedes(i, j)).count())
        .collect::<Vec<_>>();
    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        let next = match (0..n).find(|&j| !placed[j] && pending[j] == 0) {
            Some(j) => j,
            None => {
                let j = (0..n).find(|&j| !placed[j]).unwrap_or_default();
                log::warn!("containment cycle among features, placing feature {j} first");
                j
            }
        };
        placed[next] = true;
        order.push(next);
        for k in 0..n {
            if !placed[k] && precedes(next, k) {
                pending[k] -= 1;
            }
        }
    }

    let mut slots = features.into_iter().map(Some).collect::<Vec<_>>();
    Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
}

/// the geometry of a feature if it can take part in containment
fn polygonal(feature: &Feature) -> Option<&Geometry> {
    feature
        .geometry
        .as_ref()
        .filter(|g| matches!(g.value, Value::Polygon(_) | Value::MultiPolygon(_)))
}

#[cfg(test)]
mod tests {
    use super::containment_order;
    use crate::model::feature::feature_ops::{polygon_feature, polygon_rings};
    use crate::model::test_library::{planar, rings, square, ContainsLookup};
    use geojson::{Feature, Geometry, Value};

    fn rings_of(features: &[Feature]) -> Vec<geojson::PolygonType> {
        features
            .iter()
            .map(|f| polygon_rings(f).cloned().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_nested_squares_outermost_first() {
        let small = square(4.0, 4.0, 1.0);
        let medium = square(2.0, 2.0, 5.0);
        let large = square(0.0, 0.0, 10.0);
        let features = vec![
            polygon_feature(small.clone()),
            polygon_feature(medium.clone()),
            polygon_feature(large.clone()),
        ];
        let result = containment_order(&planar(), features).expect("test failed");
        assert_eq!(rings_of(&result), vec![large, medium, small]);
    }

    #[test]
    fn test_unrelated_features_keep_order() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 0.0, 1.0);
        let c = square(10.0, 0.0, 1.0);
        let features = vec![
            polygon_feature(c.clone()),
            polygon_feature(a.clone()),
            polygon_feature(b.clone()),
        ];
        let result = containment_order(&planar(), features).expect("test failed");
        assert_eq!(rings_of(&result), vec![c, a, b]);
    }

    #[test]
    fn test_container_moves_ahead_of_contained() {
        let other = square(20.0, 20.0, 1.0);
        let inner = square(1.0, 1.0, 1.0);
        let outer = square(0.0, 0.0, 5.0);
        let features = vec![
            polygon_feature(other.clone()),
            polygon_feature(inner.clone()),
            polygon_feature(outer.clone()),
        ];
        let result = containment_order(&planar(), features).expect("test failed");
        assert_eq!(rings_of(&result), vec![other, outer, inner]);
    }

    #[test]
    fn test_equal_shapes_keep_order() {
        let a = square(0.0, 0.0, 2.0);
        let mut first = polygon_feature(a.clone());
        first.id = Some(geojson::feature::Id::Number(1.into()));
        let mut second = polygon_feature(a);
        second.id = Some(geojson::feature::Id::Number(2.into()));
        let result =
            containment_order(&planar(), vec![first.clone(), second.clone()]).expect("test failed");
        assert_eq!(result, vec![first, second]);
    }

    #[test]
    fn test_cycle_is_broken_deterministically() {
        let a = rings(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let b = rings(&[(2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (2.0, 0.0)]);
        let c = rings(&[(4.0, 0.0), (5.0, 0.0), (5.0, 1.0), (4.0, 0.0)]);
        // a contains b, b contains c, c contains a
        let library = ContainsLookup::new(vec![
            (a.clone(), b.clone()),
            (b.clone(), c.clone()),
            (c.clone(), a.clone()),
        ]);
        let features = vec![
            polygon_feature(b.clone()),
            polygon_feature(c.clone()),
            polygon_feature(a.clone()),
        ];
        let first = containment_order(&library, features.clone()).expect("test failed");
        let second = containment_order(&library, features).expect("test failed");
        assert_eq!(first, second);
        // b is placed to break the cycle, then c which b contains, then a
        assert_eq!(rings_of(&first), vec![b, c, a]);
    }

    #[test]
    fn test_features_without_geometry_are_unordered() {
        let outer = square(0.0, 0.0, 5.0);
        let mut empty = polygon_feature(vec![]);
        empty.geometry = None;
        let features = vec![empty.clone(), polygon_feature(outer.clone())];
        let result = containment_order(&planar(), features).expect("test failed");
        assert_eq!(result[0], empty);
        assert_eq!(polygon_rings(&result[1]), Some(&outer));
    }

    #[test]
    fn test_point_and_line_features_are_unordered() {
        let inner = square(1.0, 1.0, 1.0);
        let outer = square(0.0, 0.0, 5.0);
        let mut point = polygon_feature(vec![]);
        point.geometry = Some(Geometry::new(Value::Point(vec![2.0, 2.0])));
        let mut line = polygon_feature(vec![]);
        line.geometry = Some(Geometry::new(Value::LineString(vec![
            vec![0.0, 0.0],
            vec![9.0, 9.0],
        ])));
        let features = vec![
            point.clone(),
            polygon_feature(inner.clone()),
            line.clone(),
            polygon_feature(outer.clone()),
        ];
        let result = containment_order(&planar(), features).expect("test failed");
        assert_eq!(result[0], point);
        assert_eq!(result[1], line);
        assert_eq!(polygon_rings(&result[2]), Some(&outer));
        assert_eq!(polygon_rings(&result[3]), Some(&inner));
    }

    #[test]
    fn test_empty() {
        let result = containment_order(&planar(), vec![]).expect("test failed");
        assert!(result.is_empty());
    }
}
