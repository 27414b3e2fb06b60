//! Persistence layer
//!
//! The whole product list lives in one JSON file. Every operation reads the
//! full list and every mutation rewrites the full file.
//!
//! - [`ProductStore`]: load/save of the complete collection
//! - [`JsonFileStore`]: the on-disk implementation
//! - [`ProductRepository`]: create/update/delete on top of any store

pub mod repository;
pub mod store;

pub use repository::{ProductRepository, next_id};
pub use store::JsonFileStore;

use shared::{AppResult, Product};

/// Whole-collection storage backend
pub trait ProductStore {
    /// Read the complete collection. A store that does not exist yet is empty.
    fn load(&self) -> AppResult<Vec<Product>>;

    /// Replace the stored collection with `products`.
    fn save(&self, products: &[Product]) -> AppResult<()>;
}

impl<S: ProductStore + ?Sized> ProductStore for &S {
    fn load(&self) -> AppResult<Vec<Product>> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> AppResult<()> {
        (**self).save(products)
    }
}
