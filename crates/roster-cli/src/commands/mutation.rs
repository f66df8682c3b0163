//! Create and delete commands

use anyhow::Context;
use clap::Args;
use roster_core::errors::{ExError, RosterError};
use roster_core::EmployeeCreateRequest;
use roster_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use roster_upstream::UpstreamClient;

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub salary: u64,

    #[arg(long)]
    pub age: u32,

    #[arg(long)]
    pub title: String,
}

impl From<CreateArgs> for EmployeeCreateRequest {
    fn from(args: CreateArgs) -> Self {
        EmployeeCreateRequest::new(args.name, args.salary, args.age, args.title)
    }
}

/// Print the created record as JSON
pub async fn create(upstream: &dyn UpstreamClient, args: CreateArgs) -> anyhow::Result<()> {
    let cmd = EngineCommand::Create(args.into());
    match apply_engine_command(cmd, upstream).await? {
        EngineCommandResult::Created(record) => {
            let rendered =
                serde_json::to_string_pretty(&record).context("failed to render result")?;
            println!("{}", rendered);
            Ok(())
        }
        other => Err(unexpected_result(&other).into()),
    }
}

/// Print the outcome message. Every outcome, failures included, exits 0.
pub async fn delete(upstream: &dyn UpstreamClient, employee_id: String) -> anyhow::Result<()> {
    let cmd = EngineCommand::DeleteById { employee_id };
    match apply_engine_command(cmd, upstream).await? {
        EngineCommandResult::Deleted(outcome) => {
            println!("{}", outcome.message());
            Ok(())
        }
        other => Err(unexpected_result(&other).into()),
    }
}

fn unexpected_result(result: &EngineCommandResult) -> ExError {
    RosterError::Internal {
        message: format!("unexpected command result: {:?}", result),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use roster_core::{DeleteOutcome, ExErrorKind};

    use super::*;

    #[test]
    fn test_unexpected_result_is_internal_error() {
        let err = unexpected_result(&EngineCommandResult::Deleted(DeleteOutcome::NotFound));

        assert_eq!(err.kind(), ExErrorKind::Internal);
        assert!(err.message().contains("Deleted(NotFound)"));
    }
}
