//! Command-line interface for the waypoint route solver.
//!
//! `waypoint solve <request.json>` reads `{"coordinates": [[lat, lng], ...]}`,
//! routes it with the cheapest-arc solver and prints the ordered waypoints as
//! JSON. Solver settings layer from flags, configuration files and
//! `WAYPOINT_CMDS_SOLVE_`-prefixed environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::{CliError, EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_NO_SOLUTION};

use solve::{SolveArgs, run_solve};

pub(crate) const ARG_SOLVE_REQUEST: &str = "request-path";
pub(crate) const ARG_MAX_DISTANCE: &str = "max-distance";
pub(crate) const ARG_SPAN_COST_COEFFICIENT: &str = "span-cost-coefficient";
pub(crate) const ARG_RETURN_TO_DEPOT: &str = "return-to-depot";
pub(crate) const ENV_SOLVE_REQUEST: &str = "WAYPOINT_CMDS_SOLVE_REQUEST_PATH";

/// Run the waypoint CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration or the request are
/// rejected, or when no route satisfies the distance bound.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waypoint",
    about = "Order geographic waypoints into a single-vehicle route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Route the waypoints in a JSON request.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
