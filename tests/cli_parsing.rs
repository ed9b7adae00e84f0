//! Tests for CLI argument parsing.

use clap::Parser;
use geo_lookup::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_cli_bare_invocation_uses_defaults() {
    let config = Config::try_parse_from(["geo_lookup"]).expect("Should parse bare invocation");

    assert_eq!(config.endpoint, "https://ipinfo.io/json");
    assert_eq!(config.token, None);
    assert_eq!(config.json_out, PathBuf::from("ipinfo_data.json"));
    assert_eq!(config.csv_out, PathBuf::from("ipinfo_data.csv"));
    assert_eq!(config.timeout_seconds, 10);
    // LogLevel doesn't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    match config.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Default format should be Plain"),
    }
}

#[test]
fn test_cli_with_options() {
    let args = [
        "geo_lookup",
        "--endpoint",
        "http://localhost:9000/json",
        "--token",
        "abc123",
        "--json-out",
        "out/geo.json",
        "--csv-out",
        "out/geo.csv",
        "--timeout-seconds",
        "3",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args).expect("Should parse full invocation");

    assert_eq!(config.endpoint, "http://localhost:9000/json");
    assert_eq!(config.token, Some("abc123".to_string()));
    assert_eq!(config.json_out, PathBuf::from("out/geo.json"));
    assert_eq!(config.csv_out, PathBuf::from("out/geo.csv"));
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    match config.log_format {
        LogFormat::Json => {}
        LogFormat::Plain => panic!("Should parse as Json format"),
    }
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    let result = Config::try_parse_from(["geo_lookup", "--log-level", "loud"]);

    assert!(result.is_err(), "Should fail on unknown log level");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("invalid value") || error_msg.contains("possible values"),
        "Error message should mention the invalid value: {}",
        error_msg
    );
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let result = Config::try_parse_from(["geo_lookup", "--timeout-seconds", "fast"]);
    assert!(result.is_err(), "Should fail on non-numeric timeout");
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let result = Config::try_parse_from(["geo_lookup", "--frob"]);

    assert!(result.is_err(), "Should fail on unknown flag");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("unexpected") || error_msg.contains("unrecognized"),
        "Error message should flag the unknown argument: {}",
        error_msg
    );
}

#[test]
fn test_cli_defaults_match_programmatic_defaults() {
    let parsed = Config::try_parse_from(["geo_lookup"]).expect("Should parse bare invocation");
    let programmatic = Config::default();

    assert_eq!(parsed.endpoint, programmatic.endpoint);
    assert_eq!(parsed.json_out, programmatic.json_out);
    assert_eq!(parsed.csv_out, programmatic.csv_out);
    assert_eq!(parsed.timeout_seconds, programmatic.timeout_seconds);
    assert_eq!(parsed.user_agent, programmatic.user_agent);
}
