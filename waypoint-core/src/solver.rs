//! The solver boundary: requests, outcomes and the [`Solver`] trait.
//!
//! A solve either produces a route ([`SolveOutcome::Routed`]), reports that no
//! route fits the distance bound ([`SolveOutcome::NoSolution`]), or fails
//! before solving because the input was unusable ([`SolveError`]). The two
//! unsuccessful cases are kept apart so callers can report them differently.

use std::time::Duration;

use thiserror::Error;

use crate::{Coordinate, InvalidInputError, Route};

/// Parameters for a solve request.
///
/// The first coordinate is the depot.
///
/// # Examples
/// ```rust
/// use waypoint_core::{Coordinate, SolveRequest};
///
/// let request = SolveRequest::new(vec![
///     Coordinate::new(17.528241, 78.387817),
///     Coordinate::new(17.385, 78.4867),
/// ]);
/// assert_eq!(request.coordinates.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Waypoints in input order.
    pub coordinates: Vec<Coordinate>,
}

impl SolveRequest {
    /// Construct a request over `coordinates`.
    #[must_use]
    pub const fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

/// Timing and search statistics for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent solving, matrix construction included.
    pub solve_time: Duration,
    /// Number of candidate arcs priced during construction.
    pub insertions_evaluated: u64,
}

/// A successfully constructed route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// The route in node indices.
    pub route: Route,
    /// The route translated back into the request's coordinates.
    pub waypoints: Vec<Coordinate>,
    /// Objective value: arc costs plus the weighted span.
    pub objective: u64,
    /// Solve statistics.
    pub diagnostics: Diagnostics,
}

/// Details of a construction that could not stay within the distance bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "no route within {max_distance_m} m: stranded at node {stranded_at} after placing {placed} nodes, {remaining} remaining"
)]
pub struct NoSolution {
    /// Nodes placed on the partial route, depot included.
    pub placed: usize,
    /// Nodes still unvisited when construction stopped; zero when only the
    /// closing depot arc failed.
    pub remaining: usize,
    /// The node at the end of the partial route.
    pub stranded_at: usize,
    /// The distance bound that could not be honoured, in metres.
    pub max_distance_m: u64,
    /// Solve statistics.
    pub diagnostics: Diagnostics,
}

/// Result of a solve that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// A route visiting every waypoint.
    Routed(SolveResponse),
    /// No route satisfies the distance bound.
    NoSolution(NoSolution),
}

impl SolveOutcome {
    /// The response, if a route was found.
    #[must_use]
    pub const fn response(&self) -> Option<&SolveResponse> {
        match self {
            Self::Routed(response) => Some(response),
            Self::NoSolution(_) => None,
        }
    }

    /// Consume the outcome, yielding the response if a route was found.
    #[must_use]
    pub fn into_response(self) -> Option<SolveResponse> {
        match self {
            Self::Routed(response) => Some(response),
            Self::NoSolution(_) => None,
        }
    }

    /// Whether a route was found.
    #[must_use]
    pub const fn is_routed(&self) -> bool {
        matches!(self, Self::Routed(_))
    }

    /// Statistics for the solve, whichever way it ended.
    #[must_use]
    pub const fn diagnostics(&self) -> Diagnostics {
        match self {
            Self::Routed(response) => response.diagnostics,
            Self::NoSolution(no_solution) => no_solution.diagnostics,
        }
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// The coordinate list was empty or contained out-of-range values.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Order waypoints into a route for a single vehicle.
///
/// Implementations return [`SolveError::InvalidInput`] for unusable input
/// rather than panicking, and report [`SolveOutcome::NoSolution`] when the
/// input is valid but no route fits the constraints.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing an outcome or an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] when the request's coordinates
    /// are empty or out of range.
    fn solve(&self, request: &SolveRequest) -> Result<SolveOutcome, SolveError>;
}
