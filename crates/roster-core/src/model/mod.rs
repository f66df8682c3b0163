pub mod employee;
pub mod outcome;
pub mod snapshot;

pub use employee::{EmployeeCreateRequest, EmployeeRecord};
pub use outcome::{DeleteFailure, DeleteOutcome, NOT_FOUND_MESSAGE};
pub use snapshot::CollectionSnapshot;
