//! Cheapest-arc route constructor for the waypoint router.
//!
//! This crate provides [`CheapestArcSolver`], the default implementation of the
//! [`Solver`](waypoint_core::Solver) trait. It builds a distance matrix through
//! a [`DistanceMatrixProvider`](waypoint_core::DistanceMatrixProvider), wraps it
//! in a [`RoutingModel`](waypoint_core::RoutingModel) and grows a single route
//! from the depot by always travelling the cheapest arc to an unvisited node.
//!
//! Construction is deterministic (ties go to the lowest node index) and runs
//! in `O(N²)` after the matrix is built. The first complete route is returned
//! as-is; there is no improvement phase.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod construction;
mod solver;

pub use solver::{CheapestArcSolver, CheapestArcSolverConfig};
