//! Roster Engine - query and mutation orchestration
//!
//! Coordinates the pure aggregation queries in `roster-core` with the
//! upstream provider behind `roster-upstream`. Every operation performs its
//! own fresh upstream read; nothing is cached between calls.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
