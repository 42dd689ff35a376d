//! # Product Client
//!
//! [`ProductsRepository`] over the product store. This is the catalog adapter
//! the order workflow reads prices and stock through, and the one that
//! applies stock decrements after an order is written.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{distinct_product_ids, OrderLine, Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use crate::repository::ProductsRepository;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl ProductsRepository for ProductClient {
    #[instrument(skip(self))]
    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        let name = name.to_owned();
        self.inner
            .find_first(move |product: &Product| product.name == name)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        self.get_many(ids.to_vec()).await
    }

    /// Read-modify-write over two requests: `GetMany` then `SaveMany`.
    ///
    /// Another caller can write between the two; its decrement is then
    /// overwritten by this batch. Quantities saturate at zero.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn update_quantity(&self, lines: &[OrderLine]) -> Result<Vec<Product>, ProductError> {
        let mut in_stock = self.get_many(distinct_product_ids(lines)).await?;

        for line in lines {
            let Some(product) = in_stock.iter_mut().find(|p| p.id == line.product_id) else {
                debug!(product_id = %line.product_id, "Skipping decrement, product not found");
                continue;
            };
            let remaining = product.quantity.checked_sub(line.quantity).unwrap_or_else(|| {
                warn!(
                    product_id = %product.id,
                    stored = product.quantity,
                    requested = line.quantity,
                    "Stock would go negative, clamping to zero"
                );
                0
            });
            *product = product.with_quantity(remaining);
        }

        let updated = self
            .inner
            .save_many(in_stock)
            .await
            .map_err(Self::map_error)?;
        info!(updated = updated.len(), "Stock decremented");
        Ok(updated)
    }
}
