//! Error types for the Replicon client.
//!
//! Every variant here is a failed exchange: the request never got an answer,
//! the answer was not a success, or the body could not be decoded. A
//! successful exchange whose envelope carries no payload is not an error and
//! surfaces as `None` (or an empty list) from the client methods instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepliconError {
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("Replicon responded with HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RepliconError {
    /// The HTTP status the service answered with, if it answered at all.
    pub const fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = RepliconError> = std::result::Result<T, E>;
