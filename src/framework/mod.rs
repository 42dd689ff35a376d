//! Generic actor-backed storage engine.
//!
//! Every store in the system (customers, products, orders) is a
//! [`ResourceActor`] holding one record type and answering [`ResourceRequest`]s.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored
//! - [`ResourceActor`] - Generic actor that owns a table of records
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests
//! - [`ActorClient`] - Shared read operations for store-specific clients
//! - [`FrameworkError`] - Plumbing errors
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Predicate, ResourceRequest, Response};
