//! # Order Client
//!
//! [`OrdersRepository`] over the order store.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use crate::repository::OrdersRepository;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl OrdersRepository for OrderClient {
    #[instrument(skip(self, params), fields(customer_id = %params.customer.id, items = params.products.len()))]
    async fn create(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id.clone()).await
    }
}
