use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use roster_api::{build_router, AppState};
use roster_core::EmployeeRecord;
use roster_upstream::in_memory::InMemoryUpstream;
use tower::ServiceExt;

/// Router over an in-memory provider, plus a handle to that provider
pub fn app_with(records: Vec<EmployeeRecord>) -> (Router, Arc<InMemoryUpstream>) {
    let upstream = Arc::new(InMemoryUpstream::with_records(records));
    let app = build_router(AppState::new(upstream.clone()));
    (app, upstream)
}

#[allow(dead_code)]
pub fn nick_and_jane() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("1").with_name("Nick").with_salary(50000),
        EmployeeRecord::new("2").with_name("Jane").with_salary(60000),
    ]
}

pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub trace_id: Option<String>,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    };
    let request_id = header("x-request-id");
    let trace_id = header("x-trace-id");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        request_id,
        trace_id,
        body,
    }
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
