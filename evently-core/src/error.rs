//! Error types for the evently ecosystem.

use thiserror::Error;

/// Errors that can occur when talking to an event backend.
///
/// Transport failures and server rejections are handled identically by the
/// store: the attempted mutation is dropped and any draft input is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The update form's id field does not parse as an integer.
    #[error("invalid event id: {0:?}")]
    InvalidEventId(String),
}

/// Result type alias for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;
