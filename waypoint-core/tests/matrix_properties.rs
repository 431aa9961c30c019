//! Property-based tests for distance matrices and the routing model.
//!
//! # Invariants tested
//!
//! - **Zero diagonal:** every node costs nothing to itself.
//! - **Co-location:** duplicated coordinates are zero apart in both directions.
//! - **Bounded:** no geodesic exceeds half the WGS84 meridian circumference.
//! - **Feasibility:** a depot-first permutation is feasible exactly when its
//!   span respects the bound.

use proptest::prelude::*;
use waypoint_core::{
    Coordinate, DistanceDimension, DistanceMatrixProvider, GeodesicDistanceProvider, RoutingModel,
};

/// Longest possible geodesic on WGS84, rounded up to whole metres.
const MAX_GEODESIC_M: u64 = 20_003_932;

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude))
}

fn coordinates_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(coordinate_strategy(), min..=max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn diagonal_is_zero_and_entries_bounded(coordinates in coordinates_strategy(1, 8)) {
        let matrix = GeodesicDistanceProvider
            .distance_matrix(&coordinates)
            .expect("generated coordinates are valid");
        prop_assert_eq!(matrix.size(), coordinates.len());
        for (from, row) in matrix.rows().enumerate() {
            prop_assert_eq!(row.get(from).copied(), Some(0));
            prop_assert!(row.iter().all(|&cost| cost <= MAX_GEODESIC_M));
        }
    }

    #[test]
    fn duplicated_coordinates_are_zero_apart(
        coordinates in coordinates_strategy(1, 6),
        pick in any::<prop::sample::Index>(),
    ) {
        let original = pick.index(coordinates.len());
        let mut extended = coordinates.clone();
        extended.push(*pick.get(&coordinates));
        let duplicate = extended.len() - 1;

        let matrix = GeodesicDistanceProvider
            .distance_matrix(&extended)
            .expect("generated coordinates are valid");
        prop_assert_eq!(matrix.get(original, duplicate), Some(0));
        prop_assert_eq!(matrix.get(duplicate, original), Some(0));
    }

    #[test]
    fn feasibility_matches_span_bound(
        coordinates in coordinates_strategy(2, 7),
        max_cumulative in 0_u64..=40_000_000,
    ) {
        let matrix = GeodesicDistanceProvider
            .distance_matrix(&coordinates)
            .expect("generated coordinates are valid");
        let dimension = DistanceDimension { max_cumulative, span_cost_coefficient: 100 };
        let model = RoutingModel::new(matrix, dimension, false);
        let route: Vec<usize> = (0..coordinates.len()).collect();

        let span = model.span(&route).expect("known nodes");
        prop_assert_eq!(model.is_feasible(&route), span <= max_cumulative);
        prop_assert_eq!(model.cost(&route), Some(span + 100 * span));
    }
}
