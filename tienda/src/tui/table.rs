//! Product table rows

use shared::Product;
use shared::util::{description_preview, format_price};

pub const HEADERS: [&str; 5] = ["ID", "Nombre", "Descripción", "Precio", "Stock"];

/// One display row, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: description_preview(&product.description),
            price: format_price(product.price),
            stock: product.stock.to_string(),
        }
    }
}

impl ProductRow {
    pub fn cells(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.price.clone(),
            self.stock.clone(),
        ]
    }
}

/// Rows newest-first (reverse file order)
pub fn build_rows(products: &[Product]) -> Vec<ProductRow> {
    products.iter().rev().map(ProductRow::from).collect()
}
