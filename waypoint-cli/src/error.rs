//! Error types emitted by the waypoint CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waypoint_core::{InvalidInputError, NoSolution};

/// Exit status for failures without a more specific code.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status when no route satisfies the distance bound.
pub const EXIT_NO_SOLUTION: u8 = 2;
/// Exit status when the request coordinates are rejected.
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Errors emitted by the waypoint CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it as an argument or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Opening the solve request failed.
    #[error("failed to open solve request at {path:?}: {source}")]
    OpenSolveRequest {
        /// Path the request was read from.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Solve request JSON could not be decoded.
    #[error("failed to parse solve request JSON at {path:?}: {source}")]
    ParseSolveRequest {
        /// Path the request was read from.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The request coordinates were rejected before solving.
    #[error("solve request in {path:?} is invalid: {source}")]
    InvalidInput {
        /// Path the request was read from.
        path: Utf8PathBuf,
        /// The rejected coordinate.
        #[source]
        source: InvalidInputError,
    },
    /// No route satisfies the distance bound.
    #[error(transparent)]
    NoSolution(#[from] NoSolution),
    /// Serializing the solve response failed.
    #[error("failed to serialize solve response: {0}")]
    SerializeSolveResponse(#[source] serde_json::Error),
    /// Writing the solve output failed.
    #[error("failed to write solve output: {0}")]
    WriteSolveOutput(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// No-solution and invalid-input outcomes get distinct codes so callers
    /// can tell an infeasible request from a malformed one.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NoSolution(_) => EXIT_NO_SOLUTION,
            Self::InvalidInput { .. } => EXIT_INVALID_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}
