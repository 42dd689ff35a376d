//! Repository contracts consumed by the order workflow.
//!
//! [`CreateOrderService`](crate::service::CreateOrderService) only sees these
//! traits. The store-backed implementations live in [`crate::clients`]; tests
//! substitute in-memory fakes.

use crate::customer_actor::CustomerError;
use crate::model::{
    Customer, CustomerCreate, CustomerId, Order, OrderCreate, OrderId, OrderLine, Product,
    ProductCreate, ProductId,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
pub trait CustomersRepository: Send + Sync {
    /// Register a new customer.
    async fn create(&self, params: CustomerCreate) -> Result<Customer, CustomerError>;

    /// Look a customer up by ID. `Ok(None)` when no such customer exists.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;

    /// Look a customer up by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError>;
}

#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Add a product to the catalog.
    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError>;

    /// First product with exactly this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError>;

    /// Every product whose ID is listed. Unknown IDs are absent from the
    /// result, not an error.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    /// Subtract each line's quantity from the product's *currently stored*
    /// quantity and persist the rows in one batch. Lines for products that no
    /// longer exist are skipped. Returns the updated products.
    async fn update_quantity(&self, lines: &[OrderLine]) -> Result<Vec<Product>, ProductError>;
}

#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persist an order with its line items.
    async fn create(&self, params: OrderCreate) -> Result<Order, OrderError>;

    /// Look an order up by ID.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;
}
