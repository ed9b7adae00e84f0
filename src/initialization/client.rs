//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Builds the HTTP client used for the lookup request.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout from the configuration
/// - User-Agent header from the configuration
///
/// Everything else stays at reqwest defaults (redirect following, TLS).
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
