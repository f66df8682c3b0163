//! In-process mock of the upstream employee provider.
//!
//! Runs an axum server on a random local port and mimics the provider's
//! envelope format, including its failure modes.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use roster_core::{EmployeeCreateRequest, EmployeeRecord};
use roster_upstream::envelope::{DeleteByNameBody, Envelope};
use roster_upstream::UpstreamConfig;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// How the mock answers every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Mode {
    Normal,
    /// `{}` with 200: an envelope without data
    NoData,
    /// 500 with an HTML body
    ServerError,
    /// 429 with an error envelope, like the provider's rate limiter
    RateLimited,
    /// Sleep before answering normally
    Slow(Duration),
}

struct MockState {
    records: Vec<EmployeeRecord>,
    next_id: u64,
    mode: Mode,
}

type Shared = Arc<RwLock<MockState>>;

pub struct MockProvider {
    state: Shared,
    addr: SocketAddr,
    _handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockProvider {
    pub async fn start(records: Vec<EmployeeRecord>) -> Self {
        let state = Arc::new(RwLock::new(MockState {
            records,
            next_id: 0,
            mode: Mode::Normal,
        }));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock provider");
        let addr = listener.local_addr().expect("Failed to get local address");

        let app = Router::new()
            .route(
                "/api/v1/employee",
                get(list_employees)
                    .post(create_employee)
                    .delete(delete_employee),
            )
            .route("/api/v1/employee/:id", get(get_employee))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock provider failed");
        });

        Self {
            state,
            addr,
            _handle: handle,
        }
    }

    pub fn config(&self) -> UpstreamConfig {
        UpstreamConfig::default().with_base_url(format!("http://{}/api/v1", self.addr))
    }

    pub async fn set_mode(&self, mode: Mode) {
        self.state.write().await.mode = mode;
    }

    pub async fn records(&self) -> Vec<EmployeeRecord> {
        self.state.read().await.records.clone()
    }
}

/// Apply the configured failure mode; `Some` short-circuits the handler.
async fn intercept(state: &Shared) -> Option<Response> {
    let mode = state.read().await.mode;
    match mode {
        Mode::Normal => None,
        Mode::NoData => Some((StatusCode::OK, Json(json!({}))).into_response()),
        Mode::ServerError => Some(
            (StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal Server Error</html>")
                .into_response(),
        ),
        Mode::RateLimited => Some(
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"status": "Failed to process request.", "error": "Too Many Requests"})),
            )
                .into_response(),
        ),
        Mode::Slow(delay) => {
            tokio::time::sleep(delay).await;
            None
        }
    }
}

async fn list_employees(State(state): State<Shared>) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    let records = state.read().await.records.clone();
    Json(Envelope::with_data(records)).into_response()
}

async fn get_employee(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    let found = state
        .read()
        .await
        .records
        .iter()
        .find(|r| r.id == id)
        .cloned();
    match found {
        Some(record) => Json(Envelope::with_data(record)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_employee(
    State(state): State<Shared>,
    Json(request): Json<EmployeeCreateRequest>,
) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    if request.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name must not be blank"})),
        )
            .into_response();
    }

    let mut state = state.write().await;
    state.next_id += 1;
    let record = EmployeeRecord::new(format!("up-{}", state.next_id))
        .with_name(request.name.clone())
        .with_salary(request.salary)
        .with_age(request.age)
        .with_title(request.title.clone())
        .with_email(format!("{}@company.com", request.name.to_lowercase()));
    state.records.push(record.clone());
    Json(Envelope::with_data(record)).into_response()
}

async fn delete_employee(
    State(state): State<Shared>,
    Json(body): Json<DeleteByNameBody>,
) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    let mut state = state.write().await;
    let before = state.records.len();
    state.records.retain(|r| r.name() != Some(body.name.as_str()));
    let deleted = state.records.len() < before;
    Json(Envelope::with_data(deleted)).into_response()
}
