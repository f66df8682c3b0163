use async_trait::async_trait;
use roster_core::{CollectionSnapshot, EmployeeCreateRequest, EmployeeRecord};

use crate::errors::Result;

/// How the upstream answered a delete-by-name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAck {
    /// Envelope carried `data: true`
    Confirmed,
    /// Envelope carried `data: false`, or no usable flag
    Rejected,
    /// The body was not an envelope at all
    Unacknowledged,
}

/// The four operations the upstream provider exposes.
///
/// Each call is a single outbound request: implementations never retry and
/// never cache. Transport failures are errors; well-formed "absent" answers
/// are values (`None`, an empty snapshot, `DeleteAck::Rejected`).
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetch the full collection.
    ///
    /// # Errors
    ///
    /// `Transport`/`Timeout` when the provider is unreachable, `Decode` when a
    /// success payload is structurally invalid.
    async fn list_all(&self) -> Result<CollectionSnapshot>;

    /// Fetch one record; `None` when the provider has no such id.
    ///
    /// # Errors
    ///
    /// `Transport`/`Timeout` only. Malformed envelopes are `Ok(None)`.
    async fn get_by_id(&self, id: &str) -> Result<Option<EmployeeRecord>>;

    /// Create a record; the provider assigns the id.
    ///
    /// # Errors
    ///
    /// `CreateFailed` for every rejection, carrying the provider's cause.
    async fn create(&self, request: &EmployeeCreateRequest) -> Result<EmployeeRecord>;

    /// Delete every record the provider matches by `name`.
    ///
    /// # Errors
    ///
    /// `Transport`/`Timeout` only.
    async fn delete_by_name(&self, name: &str) -> Result<DeleteAck>;
}
