//! Tests for the CLI flag surface and log-config precedence.

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use copair_cli::cli::{Cli, DEFAULT_MINIMUM_OCCURRENCES, LogFormatArg};
use copair_cli::logging::LogFormat;

#[test]
fn input_flag_is_required() {
    assert!(Cli::try_parse_from(["copair"]).is_err());
}

#[test]
fn defaults_match_the_documented_surface() {
    let cli = Cli::try_parse_from(["copair", "--in", "admins.csv"]).expect("parse");
    assert_eq!(cli.input, PathBuf::from("admins.csv"));
    assert!(cli.output.is_none());
    assert_eq!(cli.min_occurrence, DEFAULT_MINIMUM_OCCURRENCES);
    assert_eq!(cli.min_occurrence, 25);
    assert!(matches!(cli.log_format, LogFormatArg::Pretty));
    assert!(cli.log_file.is_none());
}

#[test]
fn negative_minimum_is_rejected() {
    assert!(Cli::try_parse_from(["copair", "--in", "a.csv", "--min", "-3"]).is_err());
}

#[test]
fn full_flag_surface_parses() {
    let cli = Cli::try_parse_from([
        "copair",
        "--in",
        "a.csv",
        "--out",
        "b.pairs",
        "--min",
        "3",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--log-file",
        "run.log",
        "--color",
        "never",
    ])
    .expect("parse");
    assert_eq!(cli.output, Some(PathBuf::from("b.pairs")));
    assert_eq!(cli.min_occurrence, 3);

    let config = cli.log_config();
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert!(!config.use_env_filter);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
    assert!(!config.with_ansi);
}

#[test]
fn verbosity_flags_set_the_level_filter() {
    let cli = Cli::try_parse_from(["copair", "--in", "a.csv", "-v"]).expect("parse");
    let config = cli.log_config();
    assert_eq!(config.level_filter, LevelFilter::INFO);
    assert!(!config.use_env_filter);
}

#[test]
fn quiet_flag_drops_to_errors_only() {
    let cli = Cli::try_parse_from(["copair", "--in", "a.csv", "-q"]).expect("parse");
    let config = cli.log_config();
    assert_eq!(config.level_filter, LevelFilter::ERROR);
}

#[test]
fn explicit_log_level_beats_verbosity() {
    let cli =
        Cli::try_parse_from(["copair", "--in", "a.csv", "-v", "--log-level", "trace"])
            .expect("parse");
    let config = cli.log_config();
    assert_eq!(config.level_filter, LevelFilter::TRACE);
}
