use crate::result::State;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Misuse errors raised by the result algebra
///
/// Domain failures never show up here; they travel as the `Failure` payload.
/// These variants only report a violated structural precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteResultError {
    #[error("[E{code:04}] Result is not in Success state (found {state})")]
    NotSuccess { code: u16, state: State },

    #[error("[E{code:04}] `{operation}` is not defined for a {state} result")]
    ContractViolation {
        code: u16,
        operation: &'static str,
        state: State,
    },

    #[error("[E{code:04}] Some of the operands should hold a function")]
    NotCallable { code: u16 },

    #[error("[E{code:04}] Argument payload is not a `{expected}`")]
    PayloadType { code: u16, expected: &'static str },

    #[error("[E{code:04}] Unknown merge priority '{value}' (expected 'pending' or 'failure')")]
    InvalidPriority { code: u16, value: String },
}

impl RemoteResultError {
    /// Create the generic "not in Success state" error
    pub fn not_success(state: State) -> Self {
        Self::NotSuccess {
            code: ErrorCode::STATE_NOT_SUCCESS,
            state,
        }
    }

    /// Create an error for an operation invoked on a state it does not accept
    pub fn contract_violation(operation: &'static str, state: State) -> Self {
        Self::ContractViolation {
            code: ErrorCode::STATE_CONTRACT_VIOLATION,
            operation,
            state,
        }
    }

    pub fn not_callable() -> Self {
        Self::NotCallable {
            code: ErrorCode::APPLY_NOT_CALLABLE,
        }
    }

    pub fn payload_type(expected: &'static str) -> Self {
        Self::PayloadType {
            code: ErrorCode::APPLY_PAYLOAD_TYPE,
            expected,
        }
    }

    pub fn invalid_priority(value: impl Into<String>) -> Self {
        Self::InvalidPriority {
            code: ErrorCode::CONFIG_INVALID_PRIORITY,
            value: value.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::NotSuccess { code, .. }
            | Self::ContractViolation { code, .. }
            | Self::NotCallable { code }
            | Self::PayloadType { code, .. }
            | Self::InvalidPriority { code, .. } => *code,
        }
    }

    /// The state that triggered the error, if the error is about a state
    pub fn state(&self) -> Option<State> {
        match self {
            Self::NotSuccess { state, .. } | Self::ContractViolation { state, .. } => Some(*state),
            _ => None,
        }
    }

    /// Get a human-readable description of the error code
    pub fn description(&self) -> &'static str {
        describe_error_code(self.code())
    }
}

/// Error recorded when a computation wrapped by
/// [`RemoteResult::from_catch_unwind`](crate::RemoteResult::from_catch_unwind) panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("computation panicked: {message}")]
pub struct PanicError {
    pub message: String,
}

impl PanicError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract a message from a panic payload
    pub(crate) fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        Self { message }
    }
}
