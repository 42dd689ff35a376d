//! Entity trait implementation for the Order record.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            customer: params.customer,
            products: params.products,
        })
    }

    fn on_create(&mut self) -> Result<(), Self::Error> {
        if self.products.is_empty() {
            return Err(OrderError::ValidationError(
                "order must contain at least one product".into(),
            ));
        }
        if let Some(item) = self.products.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "quantity for {} must be greater than zero",
                item.product_id
            )));
        }
        Ok(())
    }
}
