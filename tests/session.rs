use u_sampling::random::ReplaySource;
use u_sampling::session::{
    EXPONENTIAL_PROMPT, NORMAL_PROMPT, SEPARATOR, TRIANGULAR_PROMPT,
};
use u_sampling::{InputError, Session, SessionConfig, SessionError, TriangularInput};

/// Exponential u=0.5, triangular u=0.3, normal (u1, u2) = (0.25, 0.0).
fn scripted_source() -> ReplaySource {
    ReplaySource::new(vec![0.5, 0.3, 0.25, 0.0])
}

fn run(
    input: &str,
    source: &mut ReplaySource,
    config: SessionConfig,
) -> (Result<u_sampling::SessionReport, SessionError>, String) {
    let mut out = Vec::new();
    let result = Session::new(input.as_bytes(), &mut out, source, config).run();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn full_session_transcript() {
    let mut source = scripted_source();
    let (result, out) = run("2\n1 100 50\n10 2\n", &mut source, SessionConfig::default());
    let report = result.unwrap();

    let expected = format!(
        "{EXPONENTIAL_PROMPT}Exponential distribution: 0.346574\n{SEPARATOR}\n\
         {TRIANGULAR_PROMPT}Triangular distribution: 39.1484\n{SEPARATOR}\n\
         {NORMAL_PROMPT}Normal distribution: 13.3302\n"
    );
    assert_eq!(out, expected);

    assert!((report.exponential - 0.5_f64.ln() / -2.0).abs() < 1e-9);
    assert!((report.triangular - (1.0 + (0.3_f64 * 99.0 * 49.0).sqrt())).abs() < 1e-9);
    assert!((report.normal - (10.0 + 2.0 * (-2.0 * 0.25_f64.ln()).sqrt())).abs() < 1e-9);
    assert_eq!(source.draws(), 4);
}

#[test]
fn all_values_on_one_line() {
    let mut source = scripted_source();
    let (result, _) = run("2 1 100 50 10 2", &mut source, SessionConfig::default());
    assert!(result.is_ok());
}

#[test]
fn user_triangular_parameters_are_used() {
    let mut source = scripted_source();
    let (result, _) = run("2\n0 10 10\n0 1\n", &mut source, SessionConfig::default());
    let report = result.unwrap();
    // F = 1, so u = 0.3 takes the lower branch: sqrt(0.3 * 10 * 10).
    assert!((report.triangular - 30.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn fixed_triangular_ignores_input() {
    let mut source = scripted_source();
    let config = SessionConfig {
        triangular: TriangularInput::FixedLiteral,
        ..SessionConfig::default()
    };
    let (result, out) = run("2\n0 10 10\n0 1\n", &mut source, config);
    assert!(result.is_ok());
    assert!(out.contains("Triangular distribution: 39.1484\n"));
}

#[test]
fn malformed_number_stops_session() {
    let mut source = scripted_source();
    let (result, out) = run("2\n1 abc 50\n", &mut source, SessionConfig::default());
    match result {
        Err(SessionError::Input(InputError::InvalidNumber { field, token })) => {
            assert_eq!(field, "triangular max");
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!out.contains("Triangular distribution"));
    assert_eq!(source.draws(), 1);
}

#[test]
fn end_of_input_stops_session() {
    let mut source = scripted_source();
    let (result, _) = run("2\n1 100 50\n10\n", &mut source, SessionConfig::default());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Input(InputError::UnexpectedEof {
            field: "normal standard deviation"
        })
    ));
    assert_eq!(
        err.to_string(),
        "expected a number for normal standard deviation, reached end of input"
    );
}

#[test]
fn degenerate_parameters_propagate_by_default() {
    let mut source = ReplaySource::new(vec![0.5, 0.3, 0.25, 0.0]);
    let (result, out) = run("0\n1 100 nan\n0 1\n", &mut source, SessionConfig::default());
    let report = result.unwrap();
    assert!(report.exponential.is_infinite());
    assert!(report.triangular.is_nan());
    assert!(out.contains("Exponential distribution: inf\n"));
    assert!(out.contains("Triangular distribution: nan\n"));
}

#[test]
fn strict_mode_rejects_degenerate_triangle() {
    let mut source = scripted_source();
    let config = SessionConfig {
        strict: true,
        ..SessionConfig::default()
    };
    let (result, out) = run("2\n5 5 5\n0 1\n", &mut source, config);
    assert!(matches!(result, Err(SessionError::Domain(_))));
    assert!(out.contains("Exponential distribution: 0.346574\n"));
    assert!(!out.contains("Triangular distribution"));
}

#[test]
fn strict_mode_accepts_valid_parameters() {
    let mut source = scripted_source();
    let config = SessionConfig {
        strict: true,
        ..SessionConfig::default()
    };
    let (result, _) = run("2\n1 100 50\n10 2\n", &mut source, config);
    assert!(result.is_ok());
}
