//! CLI integration tests
//!
//! Each test runs the `roster` binary against an in-process provider.

mod common;

use common::{roster, start_provider, upstream_url};

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_highest_salary() {
    let url = upstream_url(start_provider().await);

    let out = roster(&["--upstream-url", &url, "highest-salary"]).await;

    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(out.stdout.trim(), "60000");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_top_earners_prints_json_array() {
    let url = upstream_url(start_provider().await);

    let out = roster(&["--upstream-url", &url, "top-earners"]).await;

    assert!(out.success, "stderr: {}", out.stderr);
    let names: Vec<String> = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(names, vec!["Jane", "Nick"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_search() {
    let url = upstream_url(start_provider().await);

    let out = roster(&["--upstream-url", &url, "search", "NI"]).await;

    assert!(out.success, "stderr: {}", out.stderr);
    let found: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["id"], "1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_get_missing_employee_fails() {
    let url = upstream_url(start_provider().await);

    let out = roster(&["--upstream-url", &url, "get", "999"]).await;

    assert!(!out.success);
    assert!(out.stderr.starts_with("Error:"), "stderr: {}", out.stderr);
    assert!(out.stderr.contains("ERR_NOT_FOUND"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_delete_missing_employee_prints_outcome() {
    let url = upstream_url(start_provider().await);

    let out = roster(&["--upstream-url", &url, "delete", "999"]).await;

    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(out.stdout.trim(), "Employee not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_unreachable_upstream_exits_non_zero() {
    // Port 9 (discard) on loopback is not expected to be listening.
    let out = roster(&["--upstream-url", "http://127.0.0.1:9/api/v1", "list"]).await;

    assert!(!out.success);
    assert!(out.stderr.contains("ERR_TRANSPORT"), "stderr: {}", out.stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_rejects_invalid_upstream_url() {
    let out = roster(&["--upstream-url", "ftp://example.com", "list"]).await;

    assert!(!out.success);
    assert!(out.stderr.contains("ERR_CONFIG"), "stderr: {}", out.stderr);
}
