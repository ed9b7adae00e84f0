//! Geolocation lookup client.
//!
//! Wraps a `reqwest::Client` with the configured endpoint and optional API
//! token, and performs the single GET request that drives a run.

use log::debug;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error_handling::{FetchError, InitializationError};
use crate::record::GeoRecord;

/// Client for a single geolocation endpoint.
#[derive(Debug, Clone)]
pub struct GeoLookupClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl GeoLookupClient {
    /// Creates a client from the configuration and a prebuilt HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointError` if the configured endpoint
    /// is not a valid URL.
    pub fn new(config: &Config, http: Client) -> Result<Self, InitializationError> {
        let endpoint = Url::parse(&config.endpoint)?;
        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
        })
    }

    /// The URL the lookup will request, with the token attached when present.
    pub fn lookup_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        url
    }

    /// Fetches one geolocation record from the endpoint.
    ///
    /// # Errors
    ///
    /// - `FetchError::Request` for transport failures (connect, timeout, body read)
    /// - `FetchError::Status` when the endpoint answers with a non-success status
    /// - `FetchError::Parse` when the body is not a JSON object of the expected shape
    pub async fn fetch(&self) -> Result<GeoRecord, FetchError> {
        // Log the bare endpoint, not the request URL: the token must not
        // end up in log output.
        debug!("GET {}", self.endpoint);
        let response = self.http.get(self.lookup_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        let record = serde_json::from_str(&body)?;
        Ok(record)
    }
}
