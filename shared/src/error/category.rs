//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 6xxx: Product errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Form input and selection problems (6xxx)
    Product,
    /// Data file failures (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            9000.. => Self::System,
            _ => Self::Product,
        }
    }

    /// User-input problems the user can fix in the form
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Product)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
