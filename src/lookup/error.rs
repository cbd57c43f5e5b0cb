//! Error types for breach lookups.
//!
//! Every variant is a transport failure from the user's point of view:
//! the UI only ever shows [`TRANSPORT_FAILURE_MESSAGE`]. The variants
//! exist so the log can say what actually went wrong.

use thiserror::Error;

/// Message shown for any failed lookup.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Unable to check email. Please try again later.";

/// Errors that can occur while querying the lookup service.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request URL could not be built from the base URL.
    #[error("Invalid lookup URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the service or read its response.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The service answered with a non-success status.
    #[error("Lookup service returned status {status}")]
    Status { status: u16 },

    /// The body was not valid JSON of the expected shape.
    #[error("Malformed response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Short identifier for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidUrl { .. } => "invalid_url",
            LookupError::Connection { .. } => "connection_error",
            LookupError::Timeout { .. } => "timeout",
            LookupError::Status { .. } => "bad_status",
            LookupError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// The message presented to the user. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        TRANSPORT_FAILURE_MESSAGE
    }
}
