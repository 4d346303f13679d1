use std::collections::BTreeMap;

use thiserror::Error;

/// Classified request failures.
///
/// Every non-passing HTTP status maps to exactly one variant, so callers
/// handle a closed set instead of inspecting raw status codes. The
/// notification/navigation side effects have already fired by the time a
/// variant reaches the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Could not connect to the server.")]
    Network(#[source] reqwest::Error),

    /// 401 or 419: the session is no longer valid
    #[error("Unauthenticated (status {status})")]
    Unauthenticated { status: u16 },

    /// 400 with the server-provided message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// 403 with the server-provided message
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// 422 with per-field messages
    #[error("Validation failed:{message}")]
    Validation {
        /// Newline-joined flattening of all field messages
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// 500 with the server-provided message, if any
    #[error("Server error: {message}")]
    Server { message: String },

    /// 404 passed through to the caller (no notification fires)
    #[error("Not found")]
    NotFound,

    /// Any other status the caller did not expect
    #[error("Unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a pass-through status the caller did not expect
    pub fn from_unexpected_status(status: u16) -> Self {
        match status {
            404 => ApiError::NotFound,
            status => ApiError::UnexpectedStatus { status },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_maps_404_to_not_found() {
        assert!(matches!(ApiError::from_unexpected_status(404), ApiError::NotFound));
        assert!(matches!(
            ApiError::from_unexpected_status(204),
            ApiError::UnexpectedStatus { status: 204 }
        ));
    }
}
