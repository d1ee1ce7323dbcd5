//! # Gateway Errors
//!
//! Every failure a backend call can produce, plus the mapping onto the three
//! classes the UI cares about (validation, network/auth, server).

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered 401; the session is gone or was never there.
    #[error("Unauthorized: session expired or not signed in")]
    Unauthorized,

    /// The backend (or a local capability check) refused the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected before or by the backend.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("Could not decode response: {0}")]
    Decode(String),
}

/// Coarse error classes used to pick the user-facing treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Recoverable input problems, shown inline.
    Validation,
    /// Failed fetches and expired sessions.
    NetworkOrAuth,
    /// Everything unexpected; logged and reported generically.
    Server,
}

impl ApiError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ApiError::Validation(_) => ErrorClass::Validation,
            ApiError::Api { status, .. } if matches!(*status, 400 | 422) => ErrorClass::Validation,
            ApiError::Unauthorized | ApiError::Forbidden(_) | ApiError::Transport(_) => {
                ErrorClass::NetworkOrAuth
            }
            ApiError::NotFound(_)
            | ApiError::Api { .. }
            | ApiError::Encode(_)
            | ApiError::Decode(_) => ErrorClass::Server,
        }
    }

    /// A 401 means the session expired and the user belongs on the login view.
    pub fn is_session_expiry(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Generic message suitable for an alert or toast.
    pub fn notice(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.",
            ApiError::Forbidden(_) => "You do not have permission to do that.",
            ApiError::Transport(_) => "Could not reach the server. Please try again.",
            _ if self.class() == ErrorClass::Validation => {
                "Some values were rejected. Please check them and try again."
            }
            _ => "Something went wrong. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_backend_failures() {
        assert_eq!(ApiError::Unauthorized.class(), ErrorClass::NetworkOrAuth);
        assert_eq!(
            ApiError::Api { status: 422, message: "bad".into() }.class(),
            ErrorClass::Validation
        );
        assert_eq!(
            ApiError::Api { status: 500, message: "boom".into() }.class(),
            ErrorClass::Server
        );
        assert!(ApiError::Unauthorized.is_session_expiry());
        assert!(!ApiError::Transport("timeout".into()).is_session_expiry());
    }
}
