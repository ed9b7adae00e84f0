//! Error types for initialization, the lookup request, and file output.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
///
/// These are the only failures surfaced as a nonzero exit: a run that gets
/// past initialization completes normally whether or not the lookup succeeds.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error parsing the configured lookup endpoint.
    #[error("Endpoint URL error: {0}")]
    EndpointError(#[from] url::ParseError),
}

/// Error types for a single lookup request.
///
/// All variants are handled the same way by the orchestration (logged, no
/// record, no output files), but each names its actual cause.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure: connect, timeout, or body read.
    #[error("Request error: {0}")]
    Request(#[from] ReqwestError),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected HTTP status: {status}")]
    Status {
        /// Status code returned by the endpoint.
        status: reqwest::StatusCode,
    },

    /// The response body was not a JSON object of the expected shape.
    #[error("Response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error types for writing output files.
#[derive(Error, Debug)]
pub enum PersistError {
    /// A parent directory for the output path could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be created, written, or flushed.
    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The record could not be encoded as JSON.
    #[error("Failed to encode JSON for {}: {source}", .path.display())]
    JsonEncode {
        /// File being written.
        path: PathBuf,
        /// Underlying serialization error.
        source: serde_json::Error,
    },

    /// The record could not be encoded as CSV.
    #[error("Failed to encode CSV for {}: {source}", .path.display())]
    CsvEncode {
        /// File being written.
        path: PathBuf,
        /// Underlying serialization error.
        source: csv::Error,
    },
}
