//! # Customer Store
//!
//! The customer registry: a [`ResourceActor`] holding [`Customer`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = customer_actor::new(32);
//! tokio::spawn(actor.run());
//!
//! let customers = CustomerClient::new(client);
//! let alice = customers.create(CustomerCreate { name: "Alice".into(), email: "alice@example.com".into() }).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Customer;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
