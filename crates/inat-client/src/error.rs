//! Error types for API operations.

use thiserror::Error;

/// Errors that can occur talking to the iNaturalist API.
#[derive(Debug, Error)]
pub enum InatError {
    /// The request could not be sent or the response body could not be
    /// read or decoded. Timeouts land here too.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The client could not be built from its configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
