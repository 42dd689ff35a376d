//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole system.
//! Levels come from `RUST_LOG`; the format is compact and hides module
//! targets, since store logs carry an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! # Full request payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a successful order reads roughly:
//!
//! ```text
//! INFO order_processing:execute:update_quantity: Stock decremented updated=2
//! INFO order_processing:execute: Order placed order_id=order_1 total=70.0
//! ```
//!
//! `debug` adds one line per store request (`Get`, `GetMany`, `SaveMany`)
//! with IDs and sizes.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
