//! Error types

use super::codes::ErrorCode;
use thiserror::Error;

/// Application error with structured error code
///
/// `message` is user-facing and ends up verbatim in a dialog.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// The data file exists but could not be read
    pub fn storage_read(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageReadFailed, msg)
    }

    /// The data file is not a valid product list
    pub fn storage_corrupted(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageCorrupted, msg)
    }

    /// Writing the data file failed
    pub fn storage_write(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageWriteFailed, msg)
    }

    /// No id left above the highest stored one
    pub fn id_exhausted() -> Self {
        Self::new(ErrorCode::StorageIdExhausted)
    }

    pub fn is_validation(&self) -> bool {
        self.code.category().is_user_error()
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
