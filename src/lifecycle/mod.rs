//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`OrderSystem`] - Starts the three stores, wires the repositories into
//!   the order service, and shuts everything down
//! - [`SystemConfig`] - Runtime settings
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use order_system::*;
pub use self::tracing::setup_tracing;
