use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::process::Command;

/// Minimal provider serving a fixed two-employee directory
pub async fn start_provider() -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/employee", get(list))
        .route("/api/v1/employee/:id", get(by_id));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn records() -> Vec<serde_json::Value> {
    vec![
        json!({"id": "1", "employee_name": "Nick", "employee_salary": 50000}),
        json!({"id": "2", "employee_name": "Jane", "employee_salary": 60000}),
    ]
}

async fn list() -> Json<serde_json::Value> {
    Json(json!({"data": records(), "status": "Successfully processed request."}))
}

async fn by_id(Path(id): Path<String>) -> Response {
    match records().into_iter().find(|r| r["id"] == id.as_str()) {
        Some(record) => Json(json!({"data": record})).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run the `roster` binary with logging kept quiet
pub async fn roster(args: &[&str]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .env("RUST_LOG", "off")
        .env("ROSTER__LOG__PROFILE", "test")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .await
        .expect("failed to run roster");
    CliOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub fn upstream_url(addr: SocketAddr) -> String {
    format!("http://{}/api/v1", addr)
}
