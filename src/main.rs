//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geo_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geo_lookup::config::TOKEN_ENV_VAR;
use geo_lookup::initialization::init_logger_with;
use geo_lookup::{run_lookup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting IPINFO_TOKEN in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let mut config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Fall back to the environment for the token when --token was not given
    if config.token.is_none() {
        config.token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());
    }

    // Run the lookup using the library
    match run_lookup(config).await {
        Ok(report) => {
            if report.record.is_some() {
                let files_written =
                    report.json_path.iter().count() + report.csv_path.iter().count();
                println!(
                    "✅ Lookup completed in {:.1}s ({} output file{} written)",
                    report.elapsed_seconds,
                    files_written,
                    if files_written == 1 { "" } else { "s" }
                );
            } else {
                println!("Failed to retrieve IP data.");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("geo_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}
