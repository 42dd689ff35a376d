//! Represents a product in the catalog.
//!
//! # Actor Framework
//! The record type implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Stock is only ever changed through [`Product::with_quantity`], which
//! returns the updated record for the store to save.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically allocated by the store)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns a copy of this product carrying a new stock quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_quantity_leaves_original_untouched() {
        let product = Product::new(ProductId(1), "Widget", 10.0, 5);
        let updated = product.with_quantity(2);

        assert_eq!(updated.quantity, 2);
        assert_eq!(updated.price, 10.0);
        assert_eq!(updated.name, "Widget");
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(7).to_string(), "product_7");
    }
}
