//! Roster Upstream - client for the upstream employee-data provider
//!
//! Provides:
//! - The `UpstreamClient` trait: list, get-by-id, create, delete-by-name
//! - Typed decoding of the provider's `{ "data": ... }` envelope
//! - `HttpUpstreamClient`, the reqwest implementation
//! - `UpstreamConfig` (base URL and per-call timeout)

pub mod client;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod http_client;
#[cfg(any(test, feature = "test-support"))]
pub mod in_memory;

pub use client::{DeleteAck, UpstreamClient};
pub use config::UpstreamConfig;
pub use errors::Result;
pub use http_client::HttpUpstreamClient;
