//! Engine-level mutation commands.

use roster_core::errors::Result;
use roster_core::{DeleteOutcome, EmployeeCreateRequest, EmployeeRecord};
use roster_upstream::UpstreamClient;

use super::employee_mutation;

/// Commands that change provider state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Create an employee; the provider assigns the id.
    Create(EmployeeCreateRequest),
    /// Resolve the id to a name, then delete by that name.
    DeleteById { employee_id: String },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    Created(EmployeeRecord),
    Deleted(DeleteOutcome),
}

/// Apply an engine command.
///
/// # Errors
///
/// Only `Create` can fail (`CreateFailed`). `DeleteById` always yields an
/// outcome.
pub async fn apply_engine_command(
    cmd: EngineCommand,
    upstream: &dyn UpstreamClient,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Create(request) => employee_mutation::create_employee(upstream, &request)
            .await
            .map(EngineCommandResult::Created),
        EngineCommand::DeleteById { employee_id } => Ok(EngineCommandResult::Deleted(
            employee_mutation::delete_employee(upstream, &employee_id).await,
        )),
    }
}
