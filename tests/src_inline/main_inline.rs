use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["ppc-healthqc"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn run_args(cli: Cli) -> RunArgs {
    match cli.command {
        Command::Run(args) => args,
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_run_defaults() {
    let args = run_args(parse(&["run", "--input", "terms.csv", "--out", "out"]));
    assert_eq!(args.input, PathBuf::from("terms.csv"));
    assert_eq!(args.sort_by, SortKey::Cost);
    assert!(!args.ascending);

    let profile = resolve_profile(&args).unwrap();
    assert_eq!(profile, ScoringProfile::default());

    let query = row_query(&args);
    assert_eq!(query.direction, SortDirection::Descending);
    assert!(query.filter.is_none());
}

#[test]
fn test_threshold_overrides() {
    let args = run_args(parse(&[
        "run",
        "--input",
        "terms.csv",
        "--out",
        "out",
        "--target-acos",
        "0.3",
        "--zero-order-waste",
        "10",
        "--sort-by",
        "acos",
        "--ascending",
        "--filter",
        "shoes",
    ]));
    let profile = resolve_profile(&args).unwrap();
    assert_eq!(profile.thresholds.target_acos, 0.3);
    assert_eq!(profile.thresholds.zero_order_waste, 10.0);
    assert_eq!(profile.thresholds.min_cvr, 0.08);

    let query = row_query(&args);
    assert_eq!(query.sort_by, SortKey::Acos);
    assert_eq!(query.direction, SortDirection::Ascending);
    assert_eq!(query.filter.as_deref(), Some("shoes"));
}

#[test]
fn test_negative_override_rejected() {
    let args = run_args(parse(&[
        "run",
        "--input",
        "terms.csv",
        "--out",
        "out",
        "--min-cvr=-0.5",
    ]));
    let err = resolve_profile(&args).unwrap_err();
    assert!(err.contains("thresholds.min_cvr"));
}

#[test]
fn test_check_and_defaults_parse() {
    let cli = parse(&["-v", "check", "--input", "terms.csv"]);
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Check { .. }));
    assert!(matches!(parse(&["defaults"]).command, Command::Defaults));
    assert!(Cli::try_parse_from(["ppc-healthqc", "run", "--input", "x.csv"]).is_err());
}
