//! Canonical schema constants for structured logging and error reporting

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Entity identifiers
pub const FIELD_EMPLOYEE_ID: &str = "employee_id";
pub const FIELD_EMPLOYEE_NAME: &str = "employee_name";

// Result sizes
pub const FIELD_SNAPSHOT_LEN: &str = "snapshot_len";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// HTTP header used to carry a [`crate::RequestId`] across service boundaries.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// HTTP header carrying a caller's [`crate::TraceId`]. Never minted here.
pub const HEADER_TRACE_ID: &str = "x-trace-id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_request_id_header_is_lowercase() {
        assert_eq!(HEADER_REQUEST_ID, HEADER_REQUEST_ID.to_ascii_lowercase());
        assert_eq!(HEADER_TRACE_ID, HEADER_TRACE_ID.to_ascii_lowercase());
    }
}
