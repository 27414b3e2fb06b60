//! Data models
//!
//! Persisted record types and the editable form payloads built from them.
//! All IDs are `i64`.

pub mod product;

// Re-exports
pub use product::*;
