//! Represents a placed order and its line items.
//!
//! # Actor Framework
//! The record type implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Line item prices are copied from the catalog when the order is built and
//! never re-read, so later price changes do not touch existing orders.

use crate::model::{Customer, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested product and quantity. Also the unit of a stock decrement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// The product IDs referenced by `lines`, first occurrence order, no repeats.
pub fn distinct_product_ids(lines: &[OrderLine]) -> Vec<ProductId> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|line| seen.insert(&line.product_id))
        .map(|line| line.product_id.clone())
        .collect()
}

/// A line item of a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price captured at order time.
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub products: Vec<OrderProduct>,
}

impl Order {
    /// Sum of quantity × captured price over all line items.
    pub fn total(&self) -> f64 {
        self.products
            .iter()
            .map(|item| f64::from(item.quantity) * item.price)
            .sum()
    }
}

/// Payload for persisting a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: Customer,
    pub products: Vec<OrderProduct>,
}
