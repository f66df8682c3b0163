//! Roster API - HTTP surface over the engine
//!
//! Mounts the employee routes under `/api/v1/employee`, attaches a request
//! context to every request, and renders engine errors as JSON bodies with
//! a status chosen by error kind.

pub mod error;
pub mod handlers;
pub mod request_context;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{build_router, EMPLOYEE_BASE_PATH};
pub use state::AppState;
