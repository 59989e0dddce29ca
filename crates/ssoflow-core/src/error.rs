//! Shared error type across ssoflow crates.

use thiserror::Error;

/// Stable error codes (safe to log, match on, and surface to callers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Service registry could not be consulted.
    OracleUnavailable,
    /// A registered service's access policy failed to evaluate.
    PolicyEvaluation,
    /// Context stack restore without a matching bind.
    StackUnderflow,
    /// Outbound notification failed.
    Notification,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::OracleUnavailable => "ORACLE_UNAVAILABLE",
            ErrorCode::PolicyEvaluation => "POLICY_EVALUATION",
            ErrorCode::StackUnderflow => "STACK_UNDERFLOW",
            ErrorCode::Notification => "NOTIFICATION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SsoError>;

/// Unified error type used by core and engine.
#[derive(Debug, Error)]
pub enum SsoError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("service registry unavailable: {0}")]
    OracleUnavailable(String),
    #[error("access policy evaluation failed: {0}")]
    PolicyEvaluation(String),
    #[error("authentication context stack underflow (restore without bind)")]
    StackUnderflow,
    #[error("notification failed: {0}")]
    Notification(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SsoError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SsoError::BadConfig(_) => ErrorCode::BadConfig,
            SsoError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SsoError::OracleUnavailable(_) => ErrorCode::OracleUnavailable,
            SsoError::PolicyEvaluation(_) => ErrorCode::PolicyEvaluation,
            SsoError::StackUnderflow => ErrorCode::StackUnderflow,
            SsoError::Notification(_) => ErrorCode::Notification,
            SsoError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Programming-error class failures (nesting discipline bugs), as opposed
    /// to runtime conditions a caller may retry or report.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SsoError::StackUnderflow)
    }
}
