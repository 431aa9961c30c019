//! Solve command implementation for the waypoint CLI.

use std::io::{BufReader, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waypoint_core::{
    Coordinate, GeodesicDistanceProvider, SolveError, SolveOutcome, SolveRequest, SolveResponse,
    Solver,
};
use waypoint_solver::{CheapestArcSolver, CheapestArcSolverConfig};

use crate::{
    ARG_MAX_DISTANCE, ARG_RETURN_TO_DEPOT, ARG_SOLVE_REQUEST, ARG_SPAN_COST_COEFFICIENT, CliError,
    ENV_SOLVE_REQUEST,
};

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

/// Error message reported when no route satisfies the bound.
pub(crate) const NO_SOLUTION_MESSAGE: &str = "No solution found";

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Route a JSON request of the form {\"coordinates\": [[lat, lng], ...]}. \
                 The first coordinate is the depot. Pass - to read the request \
                 from standard input.",
    about = "Route the waypoints in a JSON request"
)]
#[ortho_config(prefix = "WAYPOINT")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing the request, or `-` for stdin.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Upper bound on the route distance, in metres.
    #[arg(long = ARG_MAX_DISTANCE, value_name = "metres")]
    #[serde(default)]
    pub(crate) max_distance: Option<u64>,
    /// Weight of the route span in the reported objective.
    #[arg(long = ARG_SPAN_COST_COEFFICIENT, value_name = "weight")]
    #[serde(default)]
    pub(crate) span_cost_coefficient: Option<u64>,
    /// End the route with an arc back to the depot.
    #[arg(
        long = ARG_RETURN_TO_DEPOT,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) return_to_depot: Option<bool>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Where the request payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestSource {
    Stdin,
    File(Utf8PathBuf),
}

impl RequestSource {
    fn label(&self) -> Utf8PathBuf {
        match self {
            Self::Stdin => Utf8PathBuf::from(STDIN_PATH),
            Self::File(path) => path.clone(),
        }
    }
}

impl From<Utf8PathBuf> for RequestSource {
    fn from(path: Utf8PathBuf) -> Self {
        if path.as_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    pub(crate) request: RequestSource,
    pub(crate) solver: CheapestArcSolverConfig,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;

        let defaults = CheapestArcSolverConfig::default();
        let solver = CheapestArcSolverConfig {
            max_distance_m: args.max_distance.unwrap_or(defaults.max_distance_m),
            span_cost_coefficient: args
                .span_cost_coefficient
                .unwrap_or(defaults.span_cost_coefficient),
            return_to_depot: args.return_to_depot.unwrap_or(defaults.return_to_depot),
        };

        Ok(Self {
            request: RequestSource::from(request_path),
            solver,
        })
    }
}

/// Success payload: the route's waypoints in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SolutionPayload {
    pub(crate) solution: Vec<Coordinate>,
}

impl From<SolveResponse> for SolutionPayload {
    fn from(response: SolveResponse) -> Self {
        Self {
            solution: response.waypoints,
        }
    }
}

/// Failure payload for rejected or infeasible requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ErrorPayload {
    pub(crate) error: String,
}

impl ErrorPayload {
    /// The payload reported for `err`, if the boundary contract defines one.
    fn for_error(err: &CliError) -> Option<Self> {
        let error = match err {
            CliError::NoSolution(_) => NO_SOLUTION_MESSAGE.to_owned(),
            CliError::InvalidInput { source, .. } => source.to_string(),
            _ => return None,
        };
        Some(Self { error })
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_solve_with(&config, &mut stdout)
}

/// Execute a resolved solve and write its payload to `writer`.
///
/// Rejected and infeasible requests still write their error payload before
/// the error is returned.
pub(crate) fn run_solve_with(config: &SolveConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    match execute_solve(config) {
        Ok(response) => write_payload(writer, &SolutionPayload::from(response)),
        Err(err) => {
            if let Some(payload) = ErrorPayload::for_error(&err) {
                write_payload(writer, &payload)?;
            }
            Err(err)
        }
    }
}

fn execute_solve(config: &SolveConfig) -> Result<SolveResponse, CliError> {
    let request = load_solve_request(&config.request)?;
    debug!(
        "loaded {count} waypoints from {source}",
        count = request.coordinates.len(),
        source = config.request.label(),
    );
    let solver = CheapestArcSolver::with_config(GeodesicDistanceProvider, config.solver);
    match solver.solve(&request) {
        Ok(SolveOutcome::Routed(response)) => Ok(response),
        Ok(SolveOutcome::NoSolution(no_solution)) => Err(CliError::NoSolution(no_solution)),
        Err(SolveError::InvalidInput(source)) => Err(CliError::InvalidInput {
            path: config.request.label(),
            source,
        }),
    }
}

/// Loads a JSON-encoded [`SolveRequest`] from a file or stdin.
pub(crate) fn load_solve_request(source: &RequestSource) -> Result<SolveRequest, CliError> {
    match source {
        RequestSource::Stdin => {
            read_solve_request(std::io::stdin().lock(), Utf8Path::new(STDIN_PATH))
        }
        RequestSource::File(path) => {
            let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
                CliError::OpenSolveRequest {
                    path: path.clone(),
                    source,
                }
            })?;
            read_solve_request(file, path)
        }
    }
}

/// Decodes a [`SolveRequest`] from `reader`, attributing failures to `path`.
pub(crate) fn read_solve_request<R: Read>(
    reader: R,
    path: &Utf8Path,
) -> Result<SolveRequest, CliError> {
    serde_json::from_reader(BufReader::new(reader)).map_err(|source| {
        CliError::ParseSolveRequest {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_payload<T: Serialize>(writer: &mut dyn Write, payload: &T) -> Result<(), CliError> {
    let encoded =
        serde_json::to_string_pretty(payload).map_err(CliError::SerializeSolveResponse)?;
    writer
        .write_all(encoded.as_bytes())
        .map_err(CliError::WriteSolveOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSolveOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
