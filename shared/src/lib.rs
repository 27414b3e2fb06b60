//! Shared types for the Tienda product editor
//!
//! Domain model, error types, form validation and display helpers used by
//! both the persistence layer and the terminal UI.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Product, ProductDraft, ProductForm};
pub use serde::{Deserialize, Serialize};
