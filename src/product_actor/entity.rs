//! Entity trait implementation for the Product record.
//!
//! See the trait implementation on [`Product`] for method documentation.

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    /// Validates the catalog entry.
    ///
    /// # Rules
    /// - `name`: must not be blank
    /// - `price`: finite and not negative
    fn on_create(&mut self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(ProductError::ValidationError("name must not be empty".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::ValidationError(format!(
                "invalid price: {}",
                self.price
            )));
        }
        Ok(())
    }
}
