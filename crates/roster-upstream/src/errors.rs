//! Error helpers for roster-upstream
//!
//! Wraps roster-core's ExError with constructors for upstream failures.

use roster_core::errors::{ExError, RosterError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Classify a reqwest failure as a timeout or a generic transport failure
pub fn transport_error(op: &str, err: &reqwest::Error) -> ExError {
    if err.is_timeout() {
        RosterError::Timeout { op: op.to_string() }.into()
    } else {
        RosterError::Transport {
            op: op.to_string(),
            message: err.to_string(),
        }
        .into()
    }
}

/// Non-success status whose body was not a decodable envelope
pub fn status_error(op: &str, status: reqwest::StatusCode) -> ExError {
    RosterError::Transport {
        op: op.to_string(),
        message: format!("upstream returned HTTP {}", status),
    }
    .into()
}

/// Structurally invalid success payload
pub fn decode_error(op: &str, err: &serde_json::Error) -> ExError {
    RosterError::Decode {
        op: op.to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Upstream rejected a create
pub fn create_failed(cause: impl Into<String>) -> ExError {
    RosterError::CreateFailed {
        cause: cause.into(),
    }
    .into()
}

/// Rejected upstream configuration value
pub fn config_error(reason: impl Into<String>) -> ExError {
    RosterError::InvalidConfig {
        reason: reason.into(),
    }
    .into()
}
