//! Property-based tests for the cheapest-arc solver.
//!
//! # Invariants tested
//!
//! - **Permutation:** routed solves visit every input index once, from the
//!   depot.
//! - **Bound compliance:** route distance never exceeds the configured bound,
//!   and infeasible inputs report no solution rather than an error.
//! - **Greedy steps:** every step takes the cheapest arc, lowest index first.
//! - **Determinism:** identical requests produce identical routes.
//! - **Closure:** closed tours are the open path plus the return to the depot.


use proptest::prelude::*;
use waypoint_core::{
    DEFAULT_MAX_DISTANCE_M, DistanceMatrixProvider, GeodesicDistanceProvider, SolveOutcome,
    SolveRequest, Solver,
};
use waypoint_solver::{CheapestArcSolver, CheapestArcSolverConfig};

use proptest_support::{
    assert_cheapest_arc_steps, assert_permutation_from_depot, global_coordinates,
    regional_coordinates,
};

fn closed_solver() -> CheapestArcSolver {
    CheapestArcSolver::with_config(
        GeodesicDistanceProvider,
        CheapestArcSolverConfig {
            return_to_depot: true,
            ..CheapestArcSolverConfig::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Regional inputs always route, as a permutation taken greedily.
    #[test]
    fn regional_routes_are_greedy_permutations(coordinates in regional_coordinates(1, 12)) {
        let solver = CheapestArcSolver::default();
        let outcome = solver
            .solve(&SolveRequest::new(coordinates.clone()))
            .expect("generated coordinates are valid");
        let SolveOutcome::Routed(response) = outcome else {
            return Err(TestCaseError::fail("regional routes fit the default bound"));
        };

        assert_permutation_from_depot(response.route.visits(), coordinates.len())?;
        let matrix = GeodesicDistanceProvider
            .distance_matrix(&coordinates)
            .expect("generated coordinates are valid");
        assert_cheapest_arc_steps(response.route.nodes(), &matrix)?;
        prop_assert_eq!(response.waypoints.len(), coordinates.len());
    }

    /// Global inputs either route within the bound or report no solution.
    #[test]
    fn global_routes_respect_bound(coordinates in global_coordinates(1, 8)) {
        let solver = CheapestArcSolver::default();
        let outcome = solver
            .solve(&SolveRequest::new(coordinates.clone()))
            .expect("generated coordinates are valid");
        match outcome {
            SolveOutcome::Routed(response) => {
                prop_assert!(response.route.total_distance() <= DEFAULT_MAX_DISTANCE_M);
                assert_permutation_from_depot(response.route.visits(), coordinates.len())?;
            }
            SolveOutcome::NoSolution(no_solution) => {
                prop_assert!(no_solution.placed >= 1);
                prop_assert_eq!(no_solution.placed + no_solution.remaining, coordinates.len());
            }
        }
    }

    /// Two solves of the same request agree exactly.
    #[test]
    fn solving_is_deterministic(coordinates in regional_coordinates(2, 12)) {
        let solver = CheapestArcSolver::default();
        let request = SolveRequest::new(coordinates);
        let first = solver.solve(&request).expect("valid request");
        let second = solver.solve(&request).expect("valid request");
        prop_assert_eq!(
            first.response().map(|response| response.route.clone()),
            second.response().map(|response| response.route.clone())
        );
    }

    /// A closed tour is the open path followed by the depot.
    #[test]
    fn closed_tour_extends_open_path(coordinates in regional_coordinates(2, 10)) {
        let request = SolveRequest::new(coordinates);
        let open = CheapestArcSolver::default()
            .solve(&request)
            .expect("valid request")
            .into_response()
            .expect("regional routes fit the default bound");
        let closed = closed_solver()
            .solve(&request)
            .expect("valid request")
            .into_response()
            .expect("regional tours fit the default bound");

        let mut expected = open.route.nodes().to_vec();
        expected.push(0);
        prop_assert_eq!(closed.route.nodes(), expected.as_slice());
        prop_assert!(closed.route.total_distance() >= open.route.total_distance());
    }
}
