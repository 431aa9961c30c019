//! Focused unit tests covering solve CLI configuration, request parsing and
//! output payloads.

use super::helpers::{
    ANTIPODAL_REQUEST, HYDERABAD_REQUEST, OUT_OF_RANGE_REQUEST, request_workspace, write_utf8,
};
use super::*;
use crate::solve::{
    ErrorPayload, NO_SOLUTION_MESSAGE, RequestSource, SolutionPayload, SolveConfig,
    config_from_layers_for_test, load_solve_request, read_solve_request, run_solve_with,
};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use waypoint_core::{Coordinate, InvalidInputError};
use waypoint_solver::CheapestArcSolverConfig;

fn config_for(path: &Utf8Path) -> SolveConfig {
    SolveConfig {
        request: RequestSource::File(path.to_path_buf()),
        solver: CheapestArcSolverConfig::default(),
    }
}

#[rstest]
fn converting_solve_without_request_errors() {
    let err = SolveConfig::try_from(SolveArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SOLVE_REQUEST);
            assert_eq!(env, ENV_SOLVE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn missing_request_message_names_flag_and_variable() {
    let err = CliError::MissingArgument {
        field: ARG_SOLVE_REQUEST,
        env: ENV_SOLVE_REQUEST,
    };
    assert_eq!(
        err.to_string(),
        "missing request-path (pass it as an argument or set WAYPOINT_CMDS_SOLVE_REQUEST_PATH)"
    );
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}

#[rstest]
fn solve_config_applies_solver_defaults() {
    let args = SolveArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..SolveArgs::default()
    };

    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.request,
        RequestSource::File(Utf8PathBuf::from("request.json"))
    );
    assert_eq!(config.solver, CheapestArcSolverConfig::default());
}

#[rstest]
fn solve_config_applies_overrides() {
    let args = SolveArgs {
        request_path: Some(Utf8PathBuf::from("-")),
        max_distance: Some(5_000),
        span_cost_coefficient: Some(3),
        return_to_depot: Some(true),
    };

    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.request, RequestSource::Stdin);
    assert_eq!(
        config.solver,
        CheapestArcSolverConfig {
            max_distance_m: 5_000,
            span_cost_coefficient: 3,
            return_to_depot: true,
        }
    );
}

#[rstest]
#[case::bare_flag(&["waypoint", "solve", "r.json", "--return-to-depot"], Some(true))]
#[case::explicit_false(&["waypoint", "solve", "r.json", "--return-to-depot", "false"], Some(false))]
#[case::absent(&["waypoint", "solve", "r.json"], None)]
fn return_to_depot_flag_parses(#[case] argv: &[&str], #[case] expected: Option<bool>) {
    let cli = Cli::try_parse_from(argv.iter().copied()).expect("arguments should parse");
    let Command::Solve(args) = cli.command;
    assert_eq!(args.return_to_depot, expected);
    assert_eq!(args.request_path, Some(Utf8PathBuf::from("r.json")));
}

#[rstest]
fn numeric_flags_parse() {
    let cli = Cli::try_parse_from([
        "waypoint",
        "solve",
        "r.json",
        "--max-distance",
        "1200",
        "--span-cost-coefficient",
        "0",
    ])
    .expect("arguments should parse");
    let Command::Solve(args) = cli.command;
    assert_eq!(args.max_distance, Some(1_200));
    assert_eq!(args.span_cost_coefficient, Some(0));
}

#[rstest]
fn read_solve_request_decodes_coordinate_pairs() {
    let request = read_solve_request(HYDERABAD_REQUEST.as_bytes(), Utf8Path::new("-"))
        .expect("request should decode");
    assert_eq!(request.coordinates.len(), 3);
    assert_eq!(
        request.coordinates.first(),
        Some(&Coordinate::new(17.528_241, 78.387_817))
    );
}

#[rstest]
#[case::not_json("{ not valid json")]
#[case::missing_field(r#"{"points": []}"#)]
#[case::short_pair(r#"{"coordinates": [[1.0]]}"#)]
fn read_solve_request_rejects_malformed_payloads(#[case] payload: &str) {
    let err = read_solve_request(payload.as_bytes(), Utf8Path::new("request.json"))
        .expect_err("malformed payload should error");
    match err {
        CliError::ParseSolveRequest { path, .. } => assert_eq!(path, "request.json"),
        other => panic!("expected ParseSolveRequest, found {other:?}"),
    }
}

#[rstest]
fn load_solve_request_reads_files() {
    let (_tmp, request_path) = request_workspace();
    write_utf8(&request_path, HYDERABAD_REQUEST.as_bytes());

    let request = load_solve_request(&RequestSource::File(request_path)).expect("should decode");
    assert_eq!(request.coordinates.len(), 3);
}

#[rstest]
fn load_solve_request_io_error_returns_open_error() {
    let (_tmp, request_path) = request_workspace();

    let err = load_solve_request(&RequestSource::File(request_path.clone()))
        .expect_err("missing request should error");
    match err {
        CliError::OpenSolveRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenSolveRequest, found {other:?}"),
    }
}

#[rstest]
fn run_solve_prints_route_waypoints() {
    let (_tmp, request_path) = request_workspace();
    write_utf8(&request_path, HYDERABAD_REQUEST.as_bytes());

    let mut stdout = Vec::new();
    run_solve_with(&config_for(&request_path), &mut stdout).expect("solve should succeed");

    let payload: SolutionPayload =
        serde_json::from_slice(&stdout).expect("output should be a solution payload");
    assert_eq!(
        payload.solution,
        vec![
            Coordinate::new(17.528_241, 78.387_817),
            Coordinate::new(17.4065, 78.4772),
            Coordinate::new(17.385, 78.4867),
        ]
    );
}

#[rstest]
fn run_solve_closes_tour_when_configured() {
    let (_tmp, request_path) = request_workspace();
    write_utf8(&request_path, HYDERABAD_REQUEST.as_bytes());
    let config = SolveConfig {
        solver: CheapestArcSolverConfig {
            return_to_depot: true,
            ..CheapestArcSolverConfig::default()
        },
        ..config_for(&request_path)
    };

    let mut stdout = Vec::new();
    run_solve_with(&config, &mut stdout).expect("solve should succeed");

    let payload: SolutionPayload = serde_json::from_slice(&stdout).expect("solution payload");
    assert_eq!(payload.solution.len(), 4);
    assert_eq!(payload.solution.first(), payload.solution.last());
}

#[rstest]
fn run_solve_reports_no_solution() {
    let (_tmp, request_path) = request_workspace();
    write_utf8(&request_path, ANTIPODAL_REQUEST.as_bytes());

    let mut stdout = Vec::new();
    let err = run_solve_with(&config_for(&request_path), &mut stdout)
        .expect_err("antipodal points exceed the bound");
    assert!(matches!(err, CliError::NoSolution(_)));
    assert_eq!(err.exit_code(), EXIT_NO_SOLUTION);

    let payload: ErrorPayload = serde_json::from_slice(&stdout).expect("error payload");
    assert_eq!(payload.error, NO_SOLUTION_MESSAGE);
}

#[rstest]
#[case::out_of_range(
    OUT_OF_RANGE_REQUEST,
    InvalidInputError::LatitudeOutOfRange { index: 1, latitude: 91.0 }
)]
#[case::empty(r#"{"coordinates": []}"#, InvalidInputError::Empty)]
fn run_solve_reports_invalid_input(#[case] payload: &str, #[case] expected: InvalidInputError) {
    let (_tmp, request_path) = request_workspace();
    write_utf8(&request_path, payload.as_bytes());

    let mut stdout = Vec::new();
    let err = run_solve_with(&config_for(&request_path), &mut stdout)
        .expect_err("invalid coordinates should be rejected");
    match &err {
        CliError::InvalidInput { path, source } => {
            assert_eq!(*path, request_path);
            assert_eq!(*source, expected);
        }
        other => panic!("expected InvalidInput, found {other:?}"),
    }
    assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);

    let printed: ErrorPayload = serde_json::from_slice(&stdout).expect("error payload");
    assert_eq!(printed.error, expected.to_string());
}

#[rstest]
fn run_solve_prints_nothing_for_unreadable_requests() {
    let (_tmp, request_path) = request_workspace();

    let mut stdout = Vec::new();
    let err = run_solve_with(&config_for(&request_path), &mut stdout)
        .expect_err("missing request should error");
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_distance": "far" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "max_distance": 1_000,
            "span_cost_coefficient": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": "from-env.json",
        "max_distance": 2_000,
    }));
    composer.push_cli(json!({
        "return_to_depot": true,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(
        config.request,
        RequestSource::File(Utf8PathBuf::from("from-env.json"))
    );
    assert_eq!(
        config.solver,
        CheapestArcSolverConfig {
            max_distance_m: 2_000,
            span_cost_coefficient: 5,
            return_to_depot: true,
        }
    );
}
