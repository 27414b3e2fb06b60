//! JsonFileStore - product list as a pretty-printed JSON array
//!
//! Written with 2-space indentation, UTF-8, non-ASCII left unescaped.
//! Saving is a single-shot overwrite: no temp file, no rename, no rollback.

use std::io;
use std::path::{Path, PathBuf};

use shared::{AppError, AppResult, Product};

use super::ProductStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductStore for JsonFileStore {
    /// Missing file → empty list. Unreadable or malformed file → error.
    fn load(&self) -> AppResult<Vec<Product>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Product file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read product file");
                return Err(AppError::storage_read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Product file is corrupted");
            AppError::storage_corrupted(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, products: &[Product]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| AppError::storage_write(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(products)
            .map_err(|e| AppError::storage_write(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to save products");
            AppError::storage_write(e.to_string())
        })?;

        tracing::debug!(path = %self.path.display(), count = products.len(), "Products saved");
        Ok(())
    }
}
