//! Mutations: create (pass-through) and delete-by-id.
//!
//! The provider deletes by name while identity is by id, so delete-by-id is
//! a two-step protocol: resolve the id to a record, then delete by that
//! record's name. Names are not unique; whatever else the provider removes
//! under the same name is the provider's decision and is not second-guessed
//! here.

use std::time::Instant;

use roster_core::errors::{ExError, ExErrorKind, Result};
use roster_core::{log_op_end, log_op_error, log_op_start};
use roster_core::{DeleteFailure, DeleteOutcome, EmployeeCreateRequest, EmployeeRecord};
use roster_upstream::{DeleteAck, UpstreamClient};

use super::observe::{elapsed_ms, observe};

pub const OP_CREATE: &str = "employee_create";
pub const OP_DELETE: &str = "employee_delete";

/// Forward `request` to the provider and return the record it created.
///
/// # Errors
///
/// `CreateFailed` whenever the provider does not produce a record.
pub async fn create_employee(
    upstream: &dyn UpstreamClient,
    request: &EmployeeCreateRequest,
) -> Result<EmployeeRecord> {
    log_op_start!(OP_CREATE, employee_name = %request.name);
    observe(OP_CREATE, upstream.create(request)).await
}

/// Phases of delete-by-id, recorded on every log line of the operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeletePhase {
    Resolving,
    Deleting,
}

impl DeletePhase {
    fn as_str(self) -> &'static str {
        match self {
            DeletePhase::Resolving => "resolving",
            DeletePhase::Deleting => "deleting",
        }
    }
}

/// Delete the record with `employee_id`.
///
/// Never fails: transport problems in either step become
/// [`DeleteOutcome::DeleteFailed`]. The delete step only runs after a
/// successful resolve.
pub async fn delete_employee(upstream: &dyn UpstreamClient, employee_id: &str) -> DeleteOutcome {
    log_op_start!(OP_DELETE, employee_id = employee_id);
    let start = Instant::now();

    let outcome = resolve_then_delete(upstream, employee_id).await;

    if let DeleteOutcome::DeleteFailed(_) = &outcome {
        let err = ExError::new(ExErrorKind::DeleteFailed)
            .with_op(OP_DELETE)
            .with_employee_id(employee_id)
            .with_message(outcome.message());
        log_op_error!(
            OP_DELETE,
            err,
            duration_ms = elapsed_ms(start),
            employee_id = employee_id,
            outcome = outcome.label()
        );
    } else {
        log_op_end!(
            OP_DELETE,
            duration_ms = elapsed_ms(start),
            employee_id = employee_id,
            outcome = outcome.label()
        );
    }
    outcome
}

async fn resolve_then_delete(upstream: &dyn UpstreamClient, employee_id: &str) -> DeleteOutcome {
    tracing::debug!(employee_id, phase = DeletePhase::Resolving.as_str());
    let record = match upstream.get_by_id(employee_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return DeleteOutcome::NotFound,
        Err(e) => return DeleteOutcome::DeleteFailed(transport_failure(&e)),
    };

    let Some(name) = record.employee_name else {
        return DeleteOutcome::DeleteFailed(DeleteFailure::Unnamed);
    };

    tracing::debug!(
        employee_id,
        employee_name = %name,
        phase = DeletePhase::Deleting.as_str()
    );
    match upstream.delete_by_name(&name).await {
        Ok(DeleteAck::Confirmed) => DeleteOutcome::Deleted { name },
        Ok(DeleteAck::Rejected) => DeleteOutcome::DeleteFailed(DeleteFailure::Rejected),
        Ok(DeleteAck::Unacknowledged) => DeleteOutcome::DeleteFailed(DeleteFailure::NoResponse),
        Err(e) => DeleteOutcome::DeleteFailed(transport_failure(&e)),
    }
}

fn transport_failure(err: &ExError) -> DeleteFailure {
    let description = if err.message().is_empty() {
        err.to_string()
    } else {
        err.message().to_string()
    };
    DeleteFailure::Transport(description)
}
