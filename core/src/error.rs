//! Error types for the posts API client.
//!
//! # Design
//! The controller treats every variant the same way (log, report, carry on),
//! but the variants stay distinct so log lines say what actually went wrong.
//! `NotFound` is split out because a stale list entry deleted elsewhere is
//! the most common failure in practice.

use thiserror::Error;

/// Errors returned by `PostClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the post does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    TransportError(String),
}
