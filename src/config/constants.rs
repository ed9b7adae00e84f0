//! Configuration constants.
//!
//! This module defines the default values used throughout the application:
//! the lookup endpoint, output paths, and HTTP client settings.

// Endpoint defaults
/// Default geolocation endpoint.
///
/// Returns the caller's own IP details as a flat JSON object. Supplying an
/// API token raises the rate limit and unlocks plan-specific fields.
pub const DEFAULT_ENDPOINT: &str = "https://ipinfo.io/json";

/// Environment variable consulted for the API token when `--token` is absent.
///
/// The binary loads `.env` at startup, so the token can live there instead of
/// the shell environment.
pub const TOKEN_ENV_VAR: &str = "IPINFO_TOKEN";

// Output defaults
/// Default path for the pretty-printed JSON output file.
pub const DEFAULT_JSON_PATH: &str = "ipinfo_data.json";
/// Default path for the two-row CSV output file.
pub const DEFAULT_CSV_PATH: &str = "ipinfo_data.csv";

// HTTP client settings
/// Per-request timeout in seconds.
///
/// The lookup is a single small GET; 10s covers slow links with room to spare.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header sent with the lookup request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("geo_lookup/", env!("CARGO_PKG_VERSION"));
