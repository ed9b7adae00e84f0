//! geo_lookup library: fetch IP geolocation data and persist it.
//!
//! This library drives one lookup cycle: request the configured endpoint,
//! parse the JSON body into a [`GeoRecord`], print it to the console, and
//! save it as pretty-printed JSON and a two-row CSV.
//!
//! # Example
//!
//! ```no_run
//! use geo_lookup::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     token: Some("<api token>".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! if report.record.is_some() {
//!     println!("Lookup finished in {:.1}s", report.elapsed_seconds);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from within an async context.

#![warn(missing_docs)]

mod client;
pub mod config;
pub mod display;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod record;

// Re-export public API
pub use client::GeoLookupClient;
pub use config::{Config, LogFormat, LogLevel};
pub use record::GeoRecord;
pub use run::{run_lookup, LookupReport};

// Internal run module (contains the lookup orchestration)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::client::GeoLookupClient;
    use crate::config::Config;
    use crate::display;
    use crate::export::{save_csv, save_json};
    use crate::initialization::init_client;
    use crate::record::GeoRecord;

    /// Results of one lookup run.
    ///
    /// Records what the run managed to do; a partial run (fetch succeeded,
    /// one file failed to write) is visible here rather than as an error.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// The fetched record, if the lookup produced a non-empty one.
        pub record: Option<GeoRecord>,
        /// Path of the JSON file, if it was written.
        pub json_path: Option<PathBuf>,
        /// Path of the CSV file, if it was written.
        pub csv_path: Option<PathBuf>,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs one lookup with the provided configuration.
    ///
    /// This is the main entry point for the library. It fetches a record from
    /// the configured endpoint, prints it to stdout, and saves it as JSON and
    /// CSV. The steps run strictly in sequence; each completes before the
    /// next begins.
    ///
    /// Fetch and save failures are logged and reflected in the report rather
    /// than returned: a JSON write failure does not skip the CSV write, and a
    /// failed lookup still completes the run.
    ///
    /// # Errors
    ///
    /// This function returns an error only for setup failures:
    /// - The HTTP client cannot be built
    /// - The configured endpoint is not a valid URL
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geo_lookup::{run_lookup, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = run_lookup(Config::default()).await?;
    /// println!("JSON written: {}", report.json_path.is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let start_time = std::time::Instant::now();

        let http = init_client(&config).context("Failed to initialize HTTP client")?;
        let client =
            GeoLookupClient::new(&config, http).context("Failed to initialize lookup client")?;

        info!("Requesting IP information from {}", config.endpoint);
        let record = match client.fetch().await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Lookup failed: {}", e);
                None
            }
        };

        // An empty object from the endpoint carries no data; treat it like a
        // failed lookup so no files are written.
        let record = record.filter(|r| !r.is_empty());

        if record.is_some() {
            info!("IP Information:");
        }
        display::print(record.as_ref());

        let mut json_path = None;
        let mut csv_path = None;
        if let Some(record) = &record {
            match save_json(record, &config.json_out) {
                Ok(()) => json_path = Some(config.json_out.clone()),
                Err(e) => error!("{}", e),
            }
            match save_csv(record, &config.csv_out) {
                Ok(()) => csv_path = Some(config.csv_out.clone()),
                Err(e) => error!("{}", e),
            }
        }

        Ok(LookupReport {
            record,
            json_path,
            csv_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
