//! Use-case services built on the repository traits.

pub mod create_order;
pub mod error;

pub use create_order::*;
pub use error::*;
