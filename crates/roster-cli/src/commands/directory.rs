//! Read commands. Each prints its result as pretty JSON.

use anyhow::Context;
use roster_core::errors::{ExError, RosterError};
use roster_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use roster_upstream::UpstreamClient;
use serde::Serialize;

pub async fn list(upstream: &dyn UpstreamClient) -> anyhow::Result<()> {
    run(upstream, EngineQuery::ListAll).await
}

pub async fn search(upstream: &dyn UpstreamClient, fragment: String) -> anyhow::Result<()> {
    run(upstream, EngineQuery::SearchByName { fragment }).await
}

pub async fn get(upstream: &dyn UpstreamClient, employee_id: String) -> anyhow::Result<()> {
    run(upstream, EngineQuery::GetById { employee_id }).await
}

pub async fn highest_salary(upstream: &dyn UpstreamClient) -> anyhow::Result<()> {
    run(upstream, EngineQuery::HighestSalary).await
}

pub async fn top_earners(upstream: &dyn UpstreamClient) -> anyhow::Result<()> {
    run(upstream, EngineQuery::TopEarnerNames).await
}

async fn run(upstream: &dyn UpstreamClient, query: EngineQuery) -> anyhow::Result<()> {
    let requested_id = match &query {
        EngineQuery::GetById { employee_id } => Some(employee_id.clone()),
        _ => None,
    };

    match apply_engine_query(query, upstream).await? {
        EngineQueryResult::Employees(records) => print_json(&records),
        EngineQueryResult::Employee(Some(record)) => print_json(&record),
        EngineQueryResult::Employee(None) => Err(ExError::from(RosterError::EmployeeNotFound {
            employee_id: requested_id.unwrap_or_default(),
        })
        .into()),
        EngineQueryResult::HighestSalary(salary) => print_json(&salary),
        EngineQueryResult::Names(names) => print_json(&names),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render result")?;
    println!("{}", rendered);
    Ok(())
}
