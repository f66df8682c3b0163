//! In-memory provider double for tests of the crates layered above this one.

use std::sync::Mutex;

use async_trait::async_trait;
use roster_core::errors::{ExError, RosterError};
use roster_core::{CollectionSnapshot, EmployeeCreateRequest, EmployeeRecord};

use crate::client::{DeleteAck, UpstreamClient};
use crate::errors::{create_failed, Result};

/// One recorded call against the double
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamCall {
    ListAll,
    GetById(String),
    Create(String),
    DeleteByName(String),
}

#[derive(Default)]
struct State {
    records: Vec<EmployeeRecord>,
    next_id: u64,
    calls: Vec<UpstreamCall>,
    unreachable: bool,
    delete_ack_override: Option<DeleteAck>,
    delete_failure: Option<ExError>,
    create_rejection: Option<String>,
}

/// Provider double holding records in memory.
///
/// Deletes remove every record with the given name, mirroring the provider's
/// name-keyed contract.
#[derive(Default)]
pub struct InMemoryUpstream {
    state: Mutex<State>,
}

impl InMemoryUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        let double = Self::new();
        double.lock().records = records;
        double
    }

    /// Make every subsequent call fail with a transport error
    pub fn set_unreachable(&self, unreachable: bool) {
        self.lock().unreachable = unreachable;
    }

    /// Answer deletes with `ack` without touching the records
    pub fn set_delete_ack(&self, ack: DeleteAck) {
        self.lock().delete_ack_override = Some(ack);
    }

    /// Fail subsequent deletes with `err`; gets and lists still succeed
    pub fn fail_deletes_with(&self, err: impl Into<ExError>) {
        self.lock().delete_failure = Some(err.into());
    }

    /// Reject subsequent creates with `cause`
    pub fn reject_creates(&self, cause: impl Into<String>) {
        self.lock().create_rejection = Some(cause.into());
    }

    pub fn records(&self) -> Vec<EmployeeRecord> {
        self.lock().records.clone()
    }

    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record_call(&self, call: UpstreamCall, op: &str) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.unreachable {
            return Err(ExError::from(RosterError::Transport {
                op: op.to_string(),
                message: "connection refused".to_string(),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl UpstreamClient for InMemoryUpstream {
    async fn list_all(&self) -> Result<CollectionSnapshot> {
        self.record_call(UpstreamCall::ListAll, "upstream_list_all")?;
        Ok(CollectionSnapshot::from(self.records()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<EmployeeRecord>> {
        self.record_call(UpstreamCall::GetById(id.to_string()), "upstream_get_by_id")?;
        Ok(self.lock().records.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, request: &EmployeeCreateRequest) -> Result<EmployeeRecord> {
        self.record_call(UpstreamCall::Create(request.name.clone()), "upstream_create")
            .map_err(|e| create_failed(e.message().to_string()))?;

        let mut state = self.lock();
        if let Some(cause) = state.create_rejection.clone() {
            return Err(create_failed(cause));
        }
        state.next_id += 1;
        let record = EmployeeRecord::new(format!("mem-{}", state.next_id))
            .with_name(request.name.clone())
            .with_salary(request.salary)
            .with_age(request.age)
            .with_title(request.title.clone());
        state.records.push(record.clone());
        Ok(record)
    }

    async fn delete_by_name(&self, name: &str) -> Result<DeleteAck> {
        self.record_call(
            UpstreamCall::DeleteByName(name.to_string()),
            "upstream_delete_by_name",
        )?;

        let mut state = self.lock();
        if let Some(err) = state.delete_failure.clone() {
            return Err(err);
        }
        if let Some(ack) = state.delete_ack_override {
            return Ok(ack);
        }
        let before = state.records.len();
        state.records.retain(|r| r.name() != Some(name));
        Ok(if state.records.len() < before {
            DeleteAck::Confirmed
        } else {
            DeleteAck::Rejected
        })
    }
}
