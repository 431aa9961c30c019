//! Facade crate for the waypoint router.
//!
//! This crate re-exports the core routing types and exposes the cheapest-arc
//! solver behind a feature flag.
//!
//! ```
//! # #[cfg(feature = "solver-cheapest-arc")]
//! # {
//! use waypoint_router::{CheapestArcSolver, Coordinate, SolveRequest, Solver};
//!
//! let request = SolveRequest::new(vec![Coordinate::new(51.5, -0.12)]);
//! let outcome = CheapestArcSolver::default().solve(&request)?;
//! assert!(outcome.is_routed());
//! # }
//! # Ok::<(), waypoint_router::SolveError>(())
//! ```

#![forbid(unsafe_code)]

pub use waypoint_core::{
    Coordinate, DEFAULT_MAX_DISTANCE_M, DEFAULT_SPAN_COST_COEFFICIENT, DEPOT, Diagnostics,
    DistanceDimension, DistanceMatrix, DistanceMatrixError, DistanceMatrixProvider,
    GeodesicDistanceProvider, InvalidInputError, NoSolution, Route, RoutingModel, SolveError,
    SolveOutcome, SolveRequest, SolveResponse, Solver, VEHICLE_COUNT, validate_coordinates,
};

#[cfg(feature = "solver-cheapest-arc")]
pub use waypoint_solver::{CheapestArcSolver, CheapestArcSolverConfig};
