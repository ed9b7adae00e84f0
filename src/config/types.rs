//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CSV_PATH, DEFAULT_ENDPOINT, DEFAULT_JSON_PATH, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Lookup configuration.
///
/// Parsed from the command line by the binary. Every argument has a default,
/// so a bare invocation is valid. Library callers and tests can construct it
/// directly or start from `Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use geo_lookup::Config;
///
/// let config = Config {
///     token: Some("<api token>".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geo_lookup",
    version,
    about = "Fetches IP geolocation data and saves it as JSON and CSV."
)]
pub struct Config {
    /// Geolocation endpoint to query
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// API token, sent as the `token` query parameter (falls back to IPINFO_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Path for the JSON output file
    #[arg(long, default_value = DEFAULT_JSON_PATH)]
    pub json_out: PathBuf,

    /// Path for the CSV output file
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub csv_out: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            json_out: PathBuf::from(DEFAULT_JSON_PATH),
            csv_out: PathBuf::from(DEFAULT_CSV_PATH),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
