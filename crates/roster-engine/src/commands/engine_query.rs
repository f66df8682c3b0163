//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for enum-shaped read
//! requests (used by the CLI). It never mutates the provider.

use roster_core::errors::Result;
use roster_core::EmployeeRecord;
use roster_upstream::UpstreamClient;

use super::directory_query;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    /// Every employee, in upstream order.
    ListAll,
    /// Employees whose name contains the fragment, ignoring case.
    SearchByName { fragment: String },
    /// One employee by id.
    GetById { employee_id: String },
    /// Highest salary, `0` when no salary data exists.
    HighestSalary,
    /// Names of the ten best-paid employees.
    TopEarnerNames,
}

/// All possible results from `apply_engine_query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQueryResult {
    Employees(Vec<EmployeeRecord>),
    Employee(Option<EmployeeRecord>),
    HighestSalary(u64),
    Names(Vec<String>),
}

/// Apply a read-only engine query.
///
/// # Errors
///
/// Upstream transport, timeout, or decode failures; see
/// [`directory_query`] for each query's contract.
pub async fn apply_engine_query(
    query: EngineQuery,
    upstream: &dyn UpstreamClient,
) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::ListAll => directory_query::list_employees(upstream)
            .await
            .map(EngineQueryResult::Employees),
        EngineQuery::SearchByName { fragment } => {
            directory_query::search_employees(upstream, &fragment)
                .await
                .map(EngineQueryResult::Employees)
        }
        EngineQuery::GetById { employee_id } => directory_query::get_employee(upstream, &employee_id)
            .await
            .map(EngineQueryResult::Employee),
        EngineQuery::HighestSalary => directory_query::highest_salary(upstream)
            .await
            .map(EngineQueryResult::HighestSalary),
        EngineQuery::TopEarnerNames => directory_query::top_earner_names(upstream)
            .await
            .map(EngineQueryResult::Names),
    }
}
