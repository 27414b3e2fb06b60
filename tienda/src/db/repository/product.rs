//! Product Repository

use shared::validation::validate_product_name;
use shared::{AppError, AppResult, Product, ProductDraft};

use crate::db::ProductStore;

/// Next id for a new record: highest existing id + 1, or 1 for an empty store
///
/// Fails when the highest id is already `i64::MAX`.
pub fn next_id(products: &[Product]) -> AppResult<i64> {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(AppError::id_exhausted)
}

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Debug, Clone)]
pub struct ProductRepository<S> {
    store: S,
}

impl<S: ProductStore> ProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All products in file order
    pub fn find_all(&self) -> AppResult<Vec<Product>> {
        self.store.load()
    }

    /// First product with the given id
    pub fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.store.load()?.into_iter().find(|p| p.id == id))
    }

    /// Append a new product with the next free id
    pub fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        validate_product_name(&draft.name)?;

        let mut products = self.store.load()?;
        let product = Product::from_draft(next_id(&products)?, draft);
        products.push(product.clone());
        self.store.save(&products)?;

        tracing::info!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Overwrite the first product matching `id`.
    ///
    /// Returns `None` when nothing matched; the unchanged list is still saved.
    pub fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Option<Product>> {
        validate_product_name(&draft.name)?;

        let mut products = self.store.load()?;
        let updated = products.iter_mut().find(|p| p.id == id).map(|p| {
            p.apply(draft);
            p.clone()
        });
        self.store.save(&products)?;

        match &updated {
            Some(product) => {
                tracing::info!(id, name = %product.name, "Product updated")
            }
            None => tracing::warn!(id, "Update matched no product"),
        }
        Ok(updated)
    }

    /// Remove every product with the given id, returning how many were removed
    pub fn delete(&self, id: i64) -> AppResult<usize> {
        let mut products = self.store.load()?;
        let before = products.len();
        products.retain(|p| p.id != id);
        let removed = before - products.len();
        self.store.save(&products)?;

        tracing::info!(id, removed, "Product deleted");
        Ok(removed)
    }
}
