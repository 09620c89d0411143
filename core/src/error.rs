//! Error types for the users API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because an unknown user id is the one
//! failure a caller can reason about. Every other non-2xx response lands in
//! `HttpError` with the raw status and body. `Transport` is produced by the
//! host when the round-trip itself fails, so the session can settle a load
//! either way. Views render all variants as the same error placeholder; the
//! kind only shows up in logs.

use thiserror::Error;

/// Errors produced while loading route data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404: the requested user does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("transport failed: {0}")]
    Transport(String),
}
