//! Pure data structures (records and DTOs) stored by the
//! [`ResourceActor`](crate::framework::ResourceActor)s.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
