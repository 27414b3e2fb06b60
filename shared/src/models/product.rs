//! Product Model

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{parse_price, parse_stock, validate_product_name};

/// Product entity, one element of the JSON array on disk
///
/// Field names on disk are Spanish (`nombre`, `descripcion`, ...) to stay
/// compatible with files written by earlier versions of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Integers in the file (`"precio": 0`) deserialize fine
    #[serde(rename = "precio", default)]
    pub price: f64,
    /// Image URL or path, never validated
    #[serde(rename = "imagen", default)]
    pub image: String,
    #[serde(default)]
    pub stock: i64,
}

impl Product {
    /// Build a new record from a validated draft
    pub fn from_draft(id: i64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            stock: draft.stock,
        }
    }

    /// Overwrite every non-id field with the draft
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.image = draft.image;
        self.stock = draft.stock;
    }
}

/// Create/update payload: the five editable fields, already parsed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub stock: i64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }
}

/// Raw text of the product form, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub stock: String,
}

impl Default for ProductForm {
    /// An empty form; the stock field starts at "0"
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
            stock: "0".to_string(),
        }
    }
}

impl ProductForm {
    /// Form contents for editing an existing record
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            stock: product.stock.to_string(),
        }
    }

    /// Validate and convert into a draft.
    ///
    /// Checks run in order price, stock, name; the first failure is returned.
    /// Blank numeric fields become 0. The description is trimmed, the name and
    /// image are kept as typed.
    pub fn parse(&self) -> AppResult<ProductDraft> {
        let price = parse_price(&self.price)?;
        let stock = parse_stock(&self.stock)?;
        validate_product_name(&self.name)?;

        Ok(ProductDraft {
            name: self.name.clone(),
            description: self.description.trim().to_string(),
            price,
            image: self.image.clone(),
            stock,
        })
    }
}
