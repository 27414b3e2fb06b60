//! Unified error system for the product editor
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and a user-facing message
//!
//! # Error Code Ranges
//!
//! - 6xxx: Product errors
//! - 9xxx: System errors (data file)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCategory, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ProductNameRequired);
//! assert_eq!(err.message, "El nombre es obligatorio");
//! assert!(err.is_validation());
//!
//! let err = AppError::storage_write("disk full");
//! assert_eq!(err.code.category(), ErrorCategory::System);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
