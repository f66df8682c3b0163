//! Pure aggregation queries over a [`CollectionSnapshot`](crate::model::CollectionSnapshot).
//!
//! None of these functions perform I/O; the engine fetches a fresh snapshot
//! and hands it here.

pub mod directory_queries;

pub use directory_queries::{
    find_by_id, highest_salary, search_by_name, top_earner_names, TOP_EARNERS_LIMIT,
};
