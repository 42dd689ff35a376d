//! # ActorEntity Trait
//!
//! The contract a record type (Customer, Product, Order) implements so that a
//! generic [`ResourceActor`](crate::framework::ResourceActor) can store it.
//!
//! Associated types keep the store type-safe: a `Product` store only accepts a
//! `ProductCreate` payload and only hands back `ProductError`s. You cannot send
//! a customer payload to the product store, the compiler rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after the record is built and before it is
//!   inserted. Return an error to reject the record. The default accepts everything.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by a `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u32` for sequential ID allocation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO).
    type Create: Send + Sync + Debug;

    /// The error type returned when a record is rejected.
    ///
    /// One enum per store rather than one per request: callers match on a
    /// single `ProductError` regardless of which request failed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this record is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the allocated ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the record is inserted.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
