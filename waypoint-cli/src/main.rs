//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use waypoint_cli::CliError;

fn main() -> ExitCode {
    match waypoint_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "The binary reports failures on stderr"
)]
fn report(err: &CliError) {
    eprintln!("waypoint: {err}");
}
