//! `CheapestArcSolver` implementation.

use std::time::Instant;

use log::{info, warn};
use waypoint_core::{
    Coordinate, DEFAULT_MAX_DISTANCE_M, DEFAULT_SPAN_COST_COEFFICIENT, Diagnostics,
    DistanceDimension, DistanceMatrixProvider, GeodesicDistanceProvider, InvalidInputError,
    NoSolution, Route, RoutingModel, SolveError, SolveOutcome, SolveRequest, SolveResponse,
    Solver,
};

use crate::construction::{CheapestArcConstruction, Construction, Stranded};

/// Configuration for [`CheapestArcSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheapestArcSolverConfig {
    /// Upper bound on the cumulative distance, in metres.
    pub max_distance_m: u64,
    /// Weight of the route span in the reported objective.
    pub span_cost_coefficient: u64,
    /// Whether routes end with an arc back to the depot.
    pub return_to_depot: bool,
}

impl Default for CheapestArcSolverConfig {
    fn default() -> Self {
        Self {
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            span_cost_coefficient: DEFAULT_SPAN_COST_COEFFICIENT,
            return_to_depot: false,
        }
    }
}

impl CheapestArcSolverConfig {
    /// The distance dimension described by this configuration.
    #[must_use]
    pub const fn dimension(&self) -> DistanceDimension {
        DistanceDimension {
            max_cumulative: self.max_distance_m,
            span_cost_coefficient: self.span_cost_coefficient,
        }
    }
}

/// Single-vehicle solver using cheapest-arc construction.
///
/// The solver is generic over how distances are measured; by default it uses
/// ellipsoidal geodesics.
///
/// # Examples
/// ```
/// use waypoint_core::{Coordinate, SolveOutcome, SolveRequest, Solver};
/// use waypoint_solver::CheapestArcSolver;
///
/// let solver = CheapestArcSolver::default();
/// let request = SolveRequest::new(vec![
///     Coordinate::new(17.528241, 78.387817),
///     Coordinate::new(17.385, 78.4867),
///     Coordinate::new(17.4065, 78.4772),
/// ]);
/// let SolveOutcome::Routed(response) = solver.solve(&request)? else {
///     panic!("expected a route");
/// };
/// assert_eq!(response.route.nodes(), &[0, 2, 1]);
/// # Ok::<(), waypoint_core::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CheapestArcSolver<P = GeodesicDistanceProvider>
where
    P: DistanceMatrixProvider,
{
    provider: P,
    config: CheapestArcSolverConfig,
}

impl Default for CheapestArcSolver<GeodesicDistanceProvider> {
    fn default() -> Self {
        Self::new(GeodesicDistanceProvider)
    }
}

impl<P> CheapestArcSolver<P>
where
    P: DistanceMatrixProvider,
{
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, CheapestArcSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(provider: P, config: CheapestArcSolverConfig) -> Self {
        Self { provider, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CheapestArcSolverConfig {
        &self.config
    }

    /// Measure `coordinates` and assemble the routing model.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when the provider rejects the
    /// coordinates.
    pub fn build_model(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<RoutingModel, InvalidInputError> {
        let matrix = self.provider.distance_matrix(coordinates)?;
        Ok(RoutingModel::new(
            matrix,
            self.config.dimension(),
            self.config.return_to_depot,
        ))
    }
}

impl<P> Solver for CheapestArcSolver<P>
where
    P: DistanceMatrixProvider + Send + Sync,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveOutcome, SolveError> {
        let started_at = Instant::now();
        let model = self.build_model(&request.coordinates)?;

        let outcome = match CheapestArcConstruction::new(&model).run() {
            Ok(construction) => {
                let response = respond(&model, &request.coordinates, construction, started_at);
                info!(
                    "routed {count} waypoints over {distance} m (objective {objective}) in {elapsed:?}",
                    count = request.coordinates.len(),
                    distance = response.route.total_distance(),
                    objective = response.objective,
                    elapsed = response.diagnostics.solve_time,
                );
                SolveOutcome::Routed(response)
            }
            Err(stranded) => {
                let no_solution = no_solution(&model, stranded, started_at);
                warn!("{no_solution}");
                SolveOutcome::NoSolution(no_solution)
            }
        };
        Ok(outcome)
    }
}

fn respond(
    model: &RoutingModel,
    coordinates: &[Coordinate],
    construction: Construction,
    started_at: Instant,
) -> SolveResponse {
    let Construction {
        nodes,
        total_distance,
        closed,
        insertions_evaluated,
    } = construction;
    let route = Route::new(nodes, total_distance, closed);
    debug_assert!(
        model.is_feasible(route.nodes()),
        "constructed route {:?} is infeasible",
        route.nodes()
    );

    // Slack is zero and the depot cumul starts at zero, so the arc total and
    // the span coincide.
    let objective = model.dimension().objective(total_distance, total_distance);
    let waypoints = route.waypoints(coordinates).unwrap_or_else(|| {
        warn!("route references nodes outside the request; returning no waypoints");
        debug_assert!(false, "route references nodes outside the request");
        Vec::new()
    });

    SolveResponse {
        route,
        waypoints,
        objective,
        diagnostics: Diagnostics {
            solve_time: started_at.elapsed(),
            insertions_evaluated,
        },
    }
}

fn no_solution(model: &RoutingModel, stranded: Stranded, started_at: Instant) -> NoSolution {
    NoSolution {
        placed: stranded.placed,
        remaining: stranded.remaining,
        stranded_at: stranded.stranded_at,
        max_distance_m: model.dimension().max_cumulative,
        diagnostics: Diagnostics {
            solve_time: started_at.elapsed(),
            insertions_evaluated: stranded.insertions_evaluated,
        },
    }
}
