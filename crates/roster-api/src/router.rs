use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::request_context::attach_request_context;
use crate::state::AppState;

/// Mount point of the employee routes
pub const EMPLOYEE_BASE_PATH: &str = "/api/v1/employee";

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(EMPLOYEE_BASE_PATH, employee_routes())
        .layer(middleware::from_fn(attach_request_context))
        .with_state(state)
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/search", get(handlers::search_all))
        .route("/search/", get(handlers::search_all))
        .route("/search/:fragment", get(handlers::search_employees))
        .route("/highestSalary", get(handlers::highest_salary))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(handlers::top_earner_names),
        )
        .route(
            "/:id",
            get(handlers::get_employee).delete(handlers::delete_employee),
        )
}
