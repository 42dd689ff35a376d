#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Recipe
//!
//! > **Order placement over resource-oriented actor stores.**
//!
//! Customers, products and orders each live in their own in-memory store: a
//! Tokio task that owns a table of records and answers requests over a
//! channel. A single use case, [`CreateOrderService`](service::CreateOrderService),
//! sits on top and places orders.
//!
//! ## 🏗️ Design Philosophy
//!
//! The workflow never talks to a store directly. It depends on three
//! repository traits ([`repository`]), and the store clients implement them.
//! Tests swap in fakes or mock stores; the workflow code does not change.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `T`
//! `ResourceActor<T: ActorEntity>` is written once and stores Customers,
//! Products and Orders alike. Validation lives in each record's
//! [`on_create`](framework::ActorEntity::on_create) hook.
//!
//! ### Mocking: Testing without Pain
//! See the [`framework::mock`] module for a complete guide.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each store defines its own error type (`CustomerError`, `ProductError`,
//! `OrderError`). The workflow wraps them with `#[from]` in
//! [`CreateOrderError`](service::CreateOrderError), next to its business
//! rejections.
//!
//! ### 2. Concurrency Model
//! Each store processes its requests sequentially, so a single batch write is
//! atomic. Placing an order is a sequence of requests and is **not**: two
//! orders for the same product can both pass the stock check. The stock
//! decrement re-reads the stored quantity, so the later write wins.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client and the mock utilities.
//!
//! ### 2. The Records ([`model`], [`customer_actor`], [`product_actor`], [`order_actor`])
//! Data types, and the `ActorEntity` implementation and error type of each store.
//!
//! ### 3. The Repositories ([`repository`], [`clients`])
//! Traits the workflow consumes and their store-backed implementations.
//!
//! ### 4. The Use Case ([`service`])
//! [`CreateOrderService`](service::CreateOrderService).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) starts the stores, wires the
//! service, and shuts down. [`SystemConfig`](lifecycle::SystemConfig) holds
//! its settings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod repository;
pub mod service;
