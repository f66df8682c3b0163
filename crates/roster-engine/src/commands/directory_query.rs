//! Read operations: every one starts from a fresh upstream snapshot, except
//! `get_employee`, which asks the provider for the single record.

use roster_core::errors::Result;
use roster_core::log_op_start;
use roster_core::queries::{self, TOP_EARNERS_LIMIT};
use roster_core::EmployeeRecord;
use roster_upstream::UpstreamClient;

use super::observe::observe;

pub const OP_LIST: &str = "employee_list";
pub const OP_SEARCH: &str = "employee_search";
pub const OP_GET: &str = "employee_get";
pub const OP_HIGHEST_SALARY: &str = "employee_highest_salary";
pub const OP_TOP_EARNERS: &str = "employee_top_earners";

/// Every record, in upstream order.
///
/// # Errors
///
/// Upstream transport, timeout, or decode failures.
pub async fn list_employees(upstream: &dyn UpstreamClient) -> Result<Vec<EmployeeRecord>> {
    log_op_start!(OP_LIST);
    observe(OP_LIST, async {
        let snapshot = upstream.list_all().await?;
        tracing::debug!(snapshot_len = snapshot.len(), "fetched snapshot");
        Ok(snapshot.into_records())
    })
    .await
}

/// Records whose name contains `fragment`, ignoring case.
///
/// # Errors
///
/// Upstream transport, timeout, or decode failures. No match is `Ok(vec![])`.
pub async fn search_employees(
    upstream: &dyn UpstreamClient,
    fragment: &str,
) -> Result<Vec<EmployeeRecord>> {
    log_op_start!(OP_SEARCH, fragment = fragment);
    observe(OP_SEARCH, async {
        let snapshot = upstream.list_all().await?;
        let found = queries::search_by_name(&snapshot, fragment);
        tracing::debug!(
            snapshot_len = snapshot.len(),
            result_len = found.len(),
            "searched snapshot"
        );
        Ok(found)
    })
    .await
}

/// The record with this id, or `None`.
///
/// # Errors
///
/// Upstream transport or timeout failures. Absence is never an error.
pub async fn get_employee(
    upstream: &dyn UpstreamClient,
    employee_id: &str,
) -> Result<Option<EmployeeRecord>> {
    log_op_start!(OP_GET, employee_id = employee_id);
    observe(OP_GET, upstream.get_by_id(employee_id)).await
}

/// Highest present salary, `0` when none.
///
/// # Errors
///
/// Upstream transport, timeout, or decode failures.
pub async fn highest_salary(upstream: &dyn UpstreamClient) -> Result<u64> {
    log_op_start!(OP_HIGHEST_SALARY);
    observe(OP_HIGHEST_SALARY, async {
        let snapshot = upstream.list_all().await?;
        Ok(queries::highest_salary(&snapshot))
    })
    .await
}

/// Names of the ten best-paid employees, best first.
///
/// # Errors
///
/// Upstream transport, timeout, or decode failures.
pub async fn top_earner_names(upstream: &dyn UpstreamClient) -> Result<Vec<String>> {
    log_op_start!(OP_TOP_EARNERS);
    observe(OP_TOP_EARNERS, async {
        let snapshot = upstream.list_all().await?;
        Ok(queries::top_earner_names(&snapshot, TOP_EARNERS_LIMIT))
    })
    .await
}
