//! Terminal outcomes of delete-by-id.
//!
//! Delete-by-id never surfaces a hard failure. Every path ends in one of the
//! outcomes below, each rendering to the message the request surface returns.
//!
//! ```text
//! Start -> Resolving -> NotFound                       (terminal)
//!                    -> ResolveFailed                  (terminal, DeleteFailed)
//!                    -> Resolved -> Deleting -> Deleted      (terminal)
//!                                            -> DeleteFailed (terminal)
//! ```

use std::fmt;

/// Message returned when the id does not resolve to a record
pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

const DELETE_FAILED_MESSAGE: &str = "Delete failed";

/// Why a delete attempt did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFailure {
    /// Upstream answered, but its success flag was false or absent
    Rejected,
    /// Upstream answered with something other than an envelope
    NoResponse,
    /// The resolved record has no name, so there is no delete key
    Unnamed,
    /// Transport failed during resolve or delete; carries the description
    Transport(String),
}

/// Outcome of one delete-by-id invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream confirmed deletion of the record with this name
    Deleted { name: String },
    /// Nothing to delete
    NotFound,
    /// Tried and failed
    DeleteFailed(DeleteFailure),
}

impl DeleteOutcome {
    /// Human-readable message returned to callers
    pub fn message(&self) -> String {
        match self {
            DeleteOutcome::Deleted { name } => name.clone(),
            DeleteOutcome::NotFound => NOT_FOUND_MESSAGE.to_string(),
            DeleteOutcome::DeleteFailed(DeleteFailure::Rejected) => {
                DELETE_FAILED_MESSAGE.to_string()
            }
            DeleteOutcome::DeleteFailed(DeleteFailure::NoResponse) => {
                format!("{} - no response", DELETE_FAILED_MESSAGE)
            }
            DeleteOutcome::DeleteFailed(DeleteFailure::Unnamed) => {
                format!("{} - employee has no name", DELETE_FAILED_MESSAGE)
            }
            DeleteOutcome::DeleteFailed(DeleteFailure::Transport(description)) => {
                format!("{} - {}", DELETE_FAILED_MESSAGE, description)
            }
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }

    /// Short label used in structured logs
    pub fn label(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted { .. } => "deleted",
            DeleteOutcome::NotFound => "not_found",
            DeleteOutcome::DeleteFailed(_) => "delete_failed",
        }
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
