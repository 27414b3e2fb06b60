//! Repository Module
//!
//! CRUD operations over a [`ProductStore`](super::ProductStore).

pub mod product;

// Re-exports
pub use product::{ProductRepository, next_id};
