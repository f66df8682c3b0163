//! Operation layer.
//!
//! `directory_query` and `employee_mutation` hold one function per
//! operation; `engine_query` and `engine_command` dispatch enum requests
//! onto them.

pub mod directory_query;
pub mod employee_mutation;
pub mod engine_command;
pub mod engine_query;

mod observe;
