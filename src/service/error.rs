//! Error type for the order creation workflow.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use std::fmt::Display;
use thiserror::Error;

/// Why [`CreateOrderService::execute`](crate::service::CreateOrderService::execute) failed.
///
/// Business rejections come first; the lookup/write variants wrap store
/// failures. Only [`StockUpdateFailed`](CreateOrderError::StockUpdateFailed)
/// leaves an order behind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    /// No lines, or a line asking for zero units.
    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    #[error("Invalid customer_id. Customer does not exist. ({0})")]
    InvalidCustomer(CustomerId),

    /// Every requested ID the catalog does not know, in request order.
    #[error("Products with ids: {} do not exist.", join(.0))]
    UnknownProducts(Vec<ProductId>),

    /// Names of every product whose stock is below the requested quantity.
    #[error("Products {} have insufficient quantities.", join(.0))]
    InsufficientStock(Vec<String>),

    #[error("Customer lookup failed: {0}")]
    CustomerLookup(#[from] CustomerError),

    #[error("Product lookup failed: {0}")]
    ProductLookup(#[from] ProductError),

    #[error("Order write failed: {0}")]
    OrderWrite(#[from] OrderError),

    /// The order was persisted but its stock decrement was not.
    #[error("Order {order_id} was created but stock was not updated: {source}")]
    StockUpdateFailed {
        order_id: OrderId,
        source: ProductError,
    },
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_list_every_item() {
        let err = CreateOrderError::UnknownProducts(vec![ProductId(2), ProductId(7)]);
        assert_eq!(
            err.to_string(),
            "Products with ids: product_2, product_7 do not exist."
        );

        let err = CreateOrderError::InsufficientStock(vec!["P1".into(), "P2".into()]);
        assert_eq!(err.to_string(), "Products P1, P2 have insufficient quantities.");
    }

    #[test]
    fn test_stock_update_failure_keeps_order_id() {
        let err = CreateOrderError::StockUpdateFailed {
            order_id: OrderId(4),
            source: ProductError::ActorCommunicationError("Actor closed".into()),
        };
        assert!(err.to_string().starts_with("Order order_4 was created"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
