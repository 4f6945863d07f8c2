//! Editor error types

use shared::error::ErrorCode;
use shared::models::{Role, TableId};
use thiserror::Error;

use crate::persistence::StorageError;

/// Editor error type
///
/// Nothing here is fatal: the worst outcome of any operation is a no-op or
/// a retry prompt in the render layer.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The referenced table is no longer in the store
    #[error("Table not found: {0}")]
    NotFound(TableId),

    /// Input rejected before anything was applied
    #[error("Validation rejected: {message}")]
    ValidationRejected { code: ErrorCode, message: String },

    /// The current role may not perform this action
    #[error("Action '{action}' is not permitted in {role} mode")]
    NotPermitted { action: &'static str, role: Role },

    /// Storage read/write failed
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] StorageError),

    /// Configuration cannot be honoured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EditorError {
    /// Create a validation rejection with a specific code
    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::ValidationRejected {
            code,
            message: message.into(),
        }
    }

    /// Error code for the render layer
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::TableNotFound,
            Self::ValidationRejected { code, .. } => *code,
            Self::NotPermitted { role: Role::Guest, .. } => ErrorCode::AdminRequired,
            Self::NotPermitted { .. } => ErrorCode::PermissionDenied,
            Self::PersistenceUnavailable(e) => e.code(),
            Self::InvalidConfig(_) => ErrorCode::ConfigError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
