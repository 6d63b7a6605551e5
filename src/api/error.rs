//! Error types for the board API pipeline.
//!
//! `ApiError` keeps the three-way transport classification (status failure,
//! no response, unbuildable request) as distinct variants so the presentation
//! layer can decide how to surface each one.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure reported by a [`Transport`](super::transport::Transport) backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be assembled by the backend.
    #[error("failed to build request: {0}")]
    Build(String),
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("transport error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside 2xx.
    #[error("request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },

    /// The request went out but no response came back.
    #[error("no response from server: {0}")]
    NoResponse(String),

    /// The request could not be constructed.
    #[error("invalid request: {0}")]
    Request(String),

    /// A 2xx response whose body is not a valid envelope.
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope reported a non-success result code.
    #[error("{result_code}: {msg}")]
    Rejected { result_code: String, msg: String },
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Build(reason) => ApiError::Request(reason),
            other => ApiError::NoResponse(other.to_string()),
        }
    }
}
