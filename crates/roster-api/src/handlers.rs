//! Employee route handlers.
//!
//! Each handler delegates to one engine operation against a fresh upstream
//! read and maps failures through [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use roster_core::core_types::RequestContext;
use roster_core::errors::{ExError, RosterError};
use roster_core::{EmployeeCreateRequest, EmployeeRecord};
use roster_engine::commands::{directory_query, employee_mutation};

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = std::result::Result<T, ApiError>;

pub async fn list_employees(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Json<Vec<EmployeeRecord>>> {
    directory_query::list_employees(state.upstream.as_ref())
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, &ctx))
}

pub async fn search_employees(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(fragment): Path<String>,
) -> ApiResult<Json<Vec<EmployeeRecord>>> {
    search(&state, &ctx, &fragment).await
}

/// `/search` and `/search/`: the empty fragment
pub async fn search_all(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Json<Vec<EmployeeRecord>>> {
    search(&state, &ctx, "").await
}

async fn search(
    state: &AppState,
    ctx: &RequestContext,
    fragment: &str,
) -> ApiResult<Json<Vec<EmployeeRecord>>> {
    directory_query::search_employees(state.upstream.as_ref(), fragment)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, ctx))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<EmployeeRecord>> {
    match directory_query::get_employee(state.upstream.as_ref(), &employee_id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => {
            let err = ExError::from(RosterError::EmployeeNotFound { employee_id })
                .with_op(directory_query::OP_GET);
            Err(ApiError::new(err, &ctx))
        }
        Err(e) => Err(ApiError::new(e, &ctx)),
    }
}

pub async fn highest_salary(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Json<u64>> {
    directory_query::highest_salary(state.upstream.as_ref())
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, &ctx))
}

pub async fn top_earner_names(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Json<Vec<String>>> {
    directory_query::top_earner_names(state.upstream.as_ref())
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, &ctx))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: std::result::Result<Json<EmployeeCreateRequest>, JsonRejection>,
) -> ApiResult<Json<EmployeeRecord>> {
    let Json(request) = body.map_err(|rejection| ApiError::invalid_body(rejection, &ctx))?;
    employee_mutation::create_employee(state.upstream.as_ref(), &request)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, &ctx))
}

/// Always 200; the body is the outcome message.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> String {
    employee_mutation::delete_employee(state.upstream.as_ref(), &employee_id)
        .await
        .message()
}
