//! Error types for the directory API client.
//!
//! # Design
//! Callers get exactly two failure kinds regardless of the operation: either
//! no response arrived (`Transport`), or one arrived and said no
//! (`RequestFailed`). Undecodable success bodies are reported as
//! `RequestFailed` with the status they came with.

use thiserror::Error;

/// Message used when a failed response carries no usable `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "server error";

/// Errors returned by `DirectoryClient` parse methods and `ApiClient`
/// operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not complete: offline, DNS failure, connection
    /// refused, timeout, or a body that could not be encoded.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response was received but indicated failure.
    #[error("request failed (HTTP {status}): {message}")]
    RequestFailed { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::RequestFailed { status, .. } => Some(*status),
        }
    }

    /// The human-readable part, without the status prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(msg) => msg,
            ApiError::RequestFailed { message, .. } => message,
        }
    }
}
