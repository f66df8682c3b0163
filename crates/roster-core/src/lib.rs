//! Roster Core - employee directory domain kernel
//!
//! This crate holds everything that does not perform I/O:
//! - Employee records, create requests, and collection snapshots
//! - Pure aggregation queries (search, extrema, ranking, lookup)
//! - The delete-by-id outcome model
//! - The canonical error facility and structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;

// The logging macros resolve schema constants through this path.
pub use roster_core_types as core_types;

pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use model::{
    CollectionSnapshot, DeleteFailure, DeleteOutcome, EmployeeCreateRequest, EmployeeRecord,
};
