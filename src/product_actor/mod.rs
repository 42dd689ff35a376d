//! Product catalog store: a [`ResourceActor`] holding [`Product`] records.
//!
//! Stock decrements go through
//! [`ProductsRepository::update_quantity`](crate::repository::ProductsRepository::update_quantity)
//! on [`ProductClient`](crate::clients::ProductClient), not through the actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
