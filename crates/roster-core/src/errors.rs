use roster_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by Roster is classified into one of these kinds.
/// Each kind maps to a stable code used in logs, HTTP error bodies, and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request boundary
    InvalidInput,
    NotFound,

    // Upstream
    /// Connection refused, reset, or a non-2xx status without a decodable envelope
    Transport,
    /// An upstream call exceeded its configured timeout
    Timeout,
    /// A 2xx upstream payload did not match the expected envelope shape
    Decode,
    /// Upstream rejected a create
    CreateFailed,
    /// Delete-by-id ended without a confirmed deletion
    DeleteFailed,

    // Process
    Config,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Transport => "ERR_TRANSPORT",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::CreateFailed => "ERR_CREATE_FAILED",
            ExErrorKind::DeleteFailed => "ERR_DELETE_FAILED",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind describes the upstream being unreachable or
    /// misbehaving, as opposed to a well-formed "absent" answer.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Transport | ExErrorKind::Timeout | ExErrorKind::Decode
        )
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    employee_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            employee_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add employee ID context
    pub fn with_employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(employee_id) = &self.employee_id {
            write!(f, " (employee_id: {})", employee_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised while talking to the upstream provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Upstream had no record for the id
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: String },

    /// Connection failure or undecodable non-success response
    #[error("Upstream transport failure during {op}: {message}")]
    Transport { op: String, message: String },

    /// Per-call timeout elapsed
    #[error("Upstream call {op} timed out")]
    Timeout { op: String },

    /// Structurally invalid upstream payload
    #[error("Could not decode upstream response for {op}: {message}")]
    Decode { op: String, message: String },

    /// Upstream rejected creation; `cause` is what the upstream reported
    #[error("Failed to create employee: {cause}")]
    CreateFailed { cause: String },

    /// Request body missing a mandatory field or otherwise malformed
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// Configuration value rejected at startup
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::EmployeeNotFound { employee_id } => ExError::new(ExErrorKind::NotFound)
                .with_employee_id(employee_id)
                .with_message("Employee not found"),
            RosterError::Transport { op, message } => ExError::new(ExErrorKind::Transport)
                .with_op(op)
                .with_message(message),
            RosterError::Timeout { op } => ExError::new(ExErrorKind::Timeout)
                .with_message(format!("upstream call {} timed out", op))
                .with_op(op),
            RosterError::Decode { op, message } => ExError::new(ExErrorKind::Decode)
                .with_op(op)
                .with_message(message),
            RosterError::CreateFailed { cause } => ExError::new(ExErrorKind::CreateFailed)
                .with_op("employee_create")
                .with_message(cause),
            RosterError::InvalidRequest { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
            RosterError::InvalidConfig { reason } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(reason),
            RosterError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
