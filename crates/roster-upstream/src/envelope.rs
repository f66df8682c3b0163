//! Typed decoding of the provider's response envelope.
//!
//! Every provider response is `{ "data": ..., "status": ..., "error": ... }`.
//! Decoding happens in two steps: the body is parsed as an envelope with an
//! untyped `data`, then `data` is decoded into the shape the operation expects.
//! Each `decode_*` function encodes one operation's rules for absence,
//! non-success statuses, and malformed payloads.

use reqwest::StatusCode;
use roster_core::{CollectionSnapshot, EmployeeRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::DeleteAck;
use crate::errors::{create_failed, decode_error, status_error, Result};

/// The provider's response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            status: None,
            error: None,
        }
    }
}

/// Body of the provider's delete-by-name request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteByNameBody {
    pub name: String,
}

fn parse_envelope(body: &str) -> std::result::Result<Envelope<Value>, serde_json::Error> {
    serde_json::from_str(body)
}

fn decode_data<T: DeserializeOwned>(data: Value) -> std::result::Result<T, serde_json::Error> {
    serde_json::from_value(data)
}

/// Decode a list response.
///
/// An envelope without `data`, or any envelope on a non-success status, is
/// an empty snapshot.
pub fn decode_list(op: &str, status: StatusCode, body: &str) -> Result<CollectionSnapshot> {
    let envelope = match parse_envelope(body) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(decode_error(op, &e)),
        Err(_) => return Err(status_error(op, status)),
    };

    if !status.is_success() {
        tracing::warn!(op, %status, error = ?envelope.error, "upstream reported failure; treating as no data");
        return Ok(CollectionSnapshot::empty());
    }

    match envelope.data {
        Some(data) => decode_data::<Vec<EmployeeRecord>>(data)
            .map(CollectionSnapshot::from)
            .map_err(|e| decode_error(op, &e)),
        None => {
            tracing::warn!(op, "no data in upstream response");
            Ok(CollectionSnapshot::empty())
        }
    }
}

/// Decode a single-record response.
///
/// 404, a missing `data`, and a malformed envelope or record on a success
/// status are all "not found". Only a non-success status with an
/// undecodable body is an error.
pub fn decode_single(op: &str, status: StatusCode, body: &str) -> Result<Option<EmployeeRecord>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let envelope = match parse_envelope(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => return Err(status_error(op, status)),
        Err(e) => {
            tracing::warn!(op, error = %e, "malformed upstream envelope; treating as not found");
            return Ok(None);
        }
    };

    if !status.is_success() {
        return Ok(None);
    }

    match envelope.data {
        Some(data) => match decode_data::<EmployeeRecord>(data) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(op, error = %e, "malformed upstream record; treating as not found");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

/// Decode a create response. Every failure is `CreateFailed` with the most
/// specific cause available.
pub fn decode_created(status: StatusCode, body: &str) -> Result<EmployeeRecord> {
    let envelope = parse_envelope(body).ok();

    if !status.is_success() {
        let cause = envelope
            .and_then(|e| e.error)
            .unwrap_or_else(|| format!("upstream returned HTTP {}", status));
        return Err(create_failed(cause));
    }

    let data = envelope
        .and_then(|e| e.data)
        .ok_or_else(|| create_failed("upstream response carried no data"))?;

    decode_data::<EmployeeRecord>(data)
        .map_err(|e| create_failed(format!("could not decode created employee: {}", e)))
}

/// Decode a delete-by-name response.
pub fn decode_delete(op: &str, status: StatusCode, body: &str) -> Result<DeleteAck> {
    let envelope = match parse_envelope(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => return Err(status_error(op, status)),
        Err(_) => return Ok(DeleteAck::Unacknowledged),
    };

    match envelope.data {
        Some(Value::Bool(true)) if status.is_success() => Ok(DeleteAck::Confirmed),
        _ => Ok(DeleteAck::Rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ExErrorKind;

    const OP: &str = "test_op";

    #[test]
    fn test_list_decodes_records_in_order() {
        let body = r#"{"data": [
            {"id": "1", "employee_name": "Nick", "employee_salary": 50000},
            {"id": "2", "employee_name": "Jane", "employee_salary": 60000}
        ], "status": "Successfully processed request."}"#;

        let snapshot = decode_list(OP, StatusCode::OK, body).unwrap();

        let ids: Vec<_> = snapshot.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_list_without_data_is_empty() {
        assert!(decode_list(OP, StatusCode::OK, "{}").unwrap().is_empty());
        assert!(decode_list(OP, StatusCode::OK, r#"{"data": null}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_non_success_with_envelope_is_empty() {
        let body = r#"{"error": "Too many requests"}"#;
        let snapshot = decode_list(OP, StatusCode::TOO_MANY_REQUESTS, body).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_list_non_success_without_envelope_is_transport() {
        let err = decode_list(OP, StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Transport);
        assert!(err.message().contains("502"));
    }

    #[test]
    fn test_list_with_wrong_data_shape_is_decode_error() {
        let body = r#"{"data": {"id": "1"}}"#;
        let err = decode_list(OP, StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Decode);

        let err = decode_list(OP, StatusCode::OK, "not json").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Decode);
    }

    #[test]
    fn test_single_found() {
        let body = r#"{"data": {"id": "123", "employee_name": "Nick"}}"#;
        let record = decode_single(OP, StatusCode::OK, body).unwrap().unwrap();
        assert_eq!(record.id, "123");
    }

    #[test]
    fn test_single_absence_is_none() {
        assert_eq!(decode_single(OP, StatusCode::OK, "{}").unwrap(), None);
        assert_eq!(decode_single(OP, StatusCode::NOT_FOUND, "").unwrap(), None);
        assert_eq!(decode_single(OP, StatusCode::OK, "garbage").unwrap(), None);
        assert_eq!(
            decode_single(OP, StatusCode::OK, r#"{"data": [1, 2]}"#).unwrap(),
            None
        );
    }

    #[test]
    fn test_single_server_error_without_envelope_is_transport() {
        let err = decode_single(OP, StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Transport);
    }

    #[test]
    fn test_created_returns_upstream_record() {
        let body = r#"{"data": {"id": "new-id", "employee_name": "Ann", "employee_salary": 10}}"#;
        let record = decode_created(StatusCode::OK, body).unwrap();
        assert_eq!(record.id, "new-id");
    }

    #[test]
    fn test_created_failure_carries_upstream_error() {
        let body = r#"{"error": "name must not be blank"}"#;
        let err = decode_created(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::CreateFailed);
        assert_eq!(err.message(), "name must not be blank");

        let err = decode_created(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert!(err.message().contains("500"));

        let err = decode_created(StatusCode::OK, "{}").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::CreateFailed);
    }

    #[test]
    fn test_delete_ack() {
        assert_eq!(
            decode_delete(OP, StatusCode::OK, r#"{"data": true}"#).unwrap(),
            DeleteAck::Confirmed
        );
        assert_eq!(
            decode_delete(OP, StatusCode::OK, r#"{"data": false}"#).unwrap(),
            DeleteAck::Rejected
        );
        assert_eq!(
            decode_delete(OP, StatusCode::OK, r#"{"status": "ok"}"#).unwrap(),
            DeleteAck::Rejected
        );
        assert_eq!(
            decode_delete(OP, StatusCode::OK, r#"{"data": "yes"}"#).unwrap(),
            DeleteAck::Rejected
        );
        assert_eq!(
            decode_delete(OP, StatusCode::OK, "").unwrap(),
            DeleteAck::Unacknowledged
        );
        assert_eq!(
            decode_delete(OP, StatusCode::NOT_FOUND, r#"{"data": false}"#).unwrap(),
            DeleteAck::Rejected
        );
        assert!(decode_delete(OP, StatusCode::SERVICE_UNAVAILABLE, "").is_err());
    }
}
