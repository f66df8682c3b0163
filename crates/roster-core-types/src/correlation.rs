//! Correlation types for request tracking
//!
//! A [`RequestContext`] is created once per inbound request (HTTP or CLI
//! invocation) and threaded into spans and error reports.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest inbound request id accepted verbatim from a caller.
const MAX_INBOUND_ID_LEN: usize = 128;

/// Unique identifier for a single request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh time-ordered id (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Accept a caller-supplied id, rejecting empty, oversized, or
    /// non-printable values.
    pub fn parse(raw: &str) -> Option<Self> {
        parse_inbound(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trace identifier shared by every request belonging to one caller flow
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(String);

impl TraceId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Accept a caller-supplied trace id under the same rules as
    /// [`RequestId::parse`].
    pub fn parse(raw: &str) -> Option<Self> {
        parse_inbound(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_inbound(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let acceptable = !trimmed.is_empty()
        && trimmed.len() <= MAX_INBOUND_ID_LEN
        && trimmed.chars().all(|c| c.is_ascii_graphic());
    acceptable.then(|| trimmed.to_string())
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context carried through operation boundaries for correlation
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    /// Create a context with a fresh RequestId
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an inbound request id when it is acceptable, otherwise mint one
    pub fn from_inbound(raw: Option<&str>) -> Self {
        let request_id = raw.and_then(RequestId::parse).unwrap_or_default();
        Self {
            request_id,
            trace_id: None,
        }
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}
