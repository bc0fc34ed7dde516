use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command definition: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_positional_args() {
    let cli = Cli::try_parse_from(["crm-seed", "clients.csv", "3"]).unwrap();
    assert_eq!(cli.convert.csv_file, Some(PathBuf::from("clients.csv")));
    assert_eq!(cli.convert.owner_id, Some(3));
    assert!(!cli.convert.strict);
    assert!(!cli.global.verbose);
}

#[test]
fn test_owner_id_optional() {
    let cli = Cli::try_parse_from(["crm-seed", "clients.csv"]).unwrap();
    assert_eq!(cli.convert.owner_id, None);
}

#[test]
fn test_no_args_parses_to_empty() {
    let cli = Cli::try_parse_from(["crm-seed"]).unwrap();
    assert!(cli.convert.csv_file.is_none());
}

#[test]
fn test_non_integer_owner_id_rejected() {
    let err = Cli::try_parse_from(["crm-seed", "clients.csv", "abc"]).unwrap_err();
    assert!(err.use_stderr());
}

#[test]
fn test_flags() {
    let cli = Cli::try_parse_from([
        "crm-seed",
        "clients.csv",
        "-o",
        "seed.sql",
        "--table",
        "crm.clients",
        "--strict",
        "-v",
        "-c",
        "conf.yml",
    ])
    .unwrap();
    assert_eq!(cli.convert.output, Some(PathBuf::from("seed.sql")));
    assert_eq!(cli.convert.table.as_deref(), Some("crm.clients"));
    assert!(cli.convert.strict);
    assert!(cli.global.verbose);
    assert_eq!(cli.global.config, Some(PathBuf::from("conf.yml")));
}
