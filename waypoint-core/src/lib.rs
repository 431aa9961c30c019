//! Core domain types for the waypoint router.
//!
//! The crate covers the first two stages of the routing pipeline and the
//! boundary shared by every solver:
//!
//! - [`Coordinate`] values and their range validation.
//! - [`DistanceMatrix`] construction through a [`DistanceMatrixProvider`], with
//!   [`GeodesicDistanceProvider`] as the default ellipsoidal implementation.
//! - [`RoutingModel`], which evaluates candidate routes against the bounded
//!   [`DistanceDimension`].
//! - The [`Solver`] trait together with its request, outcome and error types.
//!
//! Nothing here keeps state between solves.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod matrix;
pub mod model;
pub mod route;
pub mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinate::{Coordinate, InvalidInputError, validate_coordinates};
pub use matrix::{
    DistanceMatrix, DistanceMatrixError, DistanceMatrixProvider, GeodesicDistanceProvider,
};
pub use model::{
    DEFAULT_MAX_DISTANCE_M, DEFAULT_SPAN_COST_COEFFICIENT, DEPOT, DistanceDimension, RoutingModel,
    VEHICLE_COUNT,
};
pub use route::Route;
pub use solver::{
    Diagnostics, NoSolution, SolveError, SolveOutcome, SolveRequest, SolveResponse, Solver,
};
