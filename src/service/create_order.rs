//! # Create Order
//!
//! The order placement workflow. It checks the customer, then the products,
//! then the stock. Only when all three pass does it persist the order and
//! decrement stock.
//!
//! The workflow reads stock once for validation. `update_quantity` then
//! re-reads it for the decrement. Two orders racing for the same product can
//! both pass validation, and the later stock write wins.

use crate::model::{distinct_product_ids, CustomerId, Order, OrderCreate, OrderLine, OrderProduct};
use crate::repository::{CustomersRepository, OrdersRepository, ProductsRepository};
use crate::service::CreateOrderError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Input of [`CreateOrderService::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<OrderLine>,
}

impl CreateOrderRequest {
    pub fn new(customer_id: CustomerId, products: Vec<OrderLine>) -> Self {
        Self {
            customer_id,
            products,
        }
    }

    /// Shape checks that need no store access.
    pub fn validate(&self) -> Result<(), CreateOrderError> {
        if self.products.is_empty() {
            return Err(CreateOrderError::InvalidRequest(
                "order must contain at least one product".into(),
            ));
        }
        if let Some(line) = self.products.iter().find(|line| line.quantity == 0) {
            return Err(CreateOrderError::InvalidRequest(format!(
                "quantity for {} must be positive",
                line.product_id
            )));
        }
        Ok(())
    }
}

/// Places orders against injected repositories.
#[derive(Clone)]
pub struct CreateOrderService {
    customers: Arc<dyn CustomersRepository>,
    products: Arc<dyn ProductsRepository>,
    orders: Arc<dyn OrdersRepository>,
}

impl CreateOrderService {
    pub fn new(
        customers: Arc<dyn CustomersRepository>,
        products: Arc<dyn ProductsRepository>,
        orders: Arc<dyn OrdersRepository>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Validates and places an order, then decrements stock.
    ///
    /// Rejections are checked in this order and stop the workflow with no
    /// writes: unknown customer, invalid request, unknown products,
    /// insufficient stock. Once the order is written it is never rolled back;
    /// a failed stock update is reported as
    /// [`CreateOrderError::StockUpdateFailed`].
    ///
    /// Each line is checked against stock on its own. Repeating a product
    /// can therefore oversell it: `[(P1, 3), (P1, 3)]` against a stock of 5
    /// places a 6-unit order, and the decrement clamps the stock at 0.
    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, CreateOrderError> {
        debug!(?request, "execute called");

        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or_else(|| {
                warn!("Customer not found");
                CreateOrderError::InvalidCustomer(request.customer_id.clone())
            })?;
        request.validate()?;

        let found = self
            .products
            .find_all_by_id(&distinct_product_ids(&request.products))
            .await?;
        let catalog: HashMap<_, _> = found.iter().map(|p| (&p.id, p)).collect();

        let mut missing = Vec::new();
        let mut short = Vec::new();
        let mut seen_missing = HashSet::new();
        let mut seen_short = HashSet::new();
        let mut items = Vec::with_capacity(request.products.len());

        for line in &request.products {
            match catalog.get(&line.product_id) {
                None => {
                    if seen_missing.insert(&line.product_id) {
                        missing.push(line.product_id.clone());
                    }
                }
                Some(product) => {
                    if line.quantity > product.quantity && seen_short.insert(&product.id) {
                        short.push(product.name.clone());
                    }
                    items.push(OrderProduct {
                        product_id: product.id.clone(),
                        quantity: line.quantity,
                        price: product.price,
                    });
                }
            }
        }

        if !missing.is_empty() {
            warn!(?missing, "Unknown products");
            return Err(CreateOrderError::UnknownProducts(missing));
        }
        if !short.is_empty() {
            warn!(?short, "Insufficient stock");
            return Err(CreateOrderError::InsufficientStock(short));
        }

        let order = self
            .orders
            .create(OrderCreate {
                customer,
                products: items,
            })
            .await?;

        if let Err(source) = self.products.update_quantity(&request.products).await {
            warn!(order_id = %order.id, error = %source, "Stock update failed after order write");
            return Err(CreateOrderError::StockUpdateFailed {
                order_id: order.id,
                source,
            });
        }

        info!(order_id = %order.id, total = order.total(), "Order placed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_actor::CustomerError;
    use crate::model::{Customer, CustomerCreate, OrderId, Product, ProductCreate, ProductId};
    use crate::order_actor::OrderError;
    use crate::product_actor::ProductError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // -------------------------------------------------------------------------
    // Recording in-memory fakes
    // -------------------------------------------------------------------------

    #[derive(Default)]
    struct FakeCustomers {
        rows: Vec<Customer>,
        lookups: Mutex<u32>,
    }

    #[async_trait]
    impl CustomersRepository for FakeCustomers {
        async fn create(&self, _params: CustomerCreate) -> Result<Customer, CustomerError> {
            unimplemented!()
        }

        async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
            *self.lookups.lock().unwrap() += 1;
            Ok(self.rows.iter().find(|c| &c.id == id).cloned())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<Customer>, CustomerError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct FakeProducts {
        rows: Mutex<Vec<Product>>,
        lookups: Mutex<Vec<Vec<ProductId>>>,
        updates: Mutex<Vec<Vec<OrderLine>>>,
        fail_update: bool,
    }

    impl FakeProducts {
        fn with(rows: Vec<Product>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Default::default()
            }
        }

        fn quantity_of(&self, id: u32) -> u32 {
            let rows = self.rows.lock().unwrap();
            rows.iter().find(|p| p.id == ProductId(id)).unwrap().quantity
        }
    }

    #[async_trait]
    impl ProductsRepository for FakeProducts {
        async fn create(&self, _params: ProductCreate) -> Result<Product, ProductError> {
            unimplemented!()
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Product>, ProductError> {
            unimplemented!()
        }

        async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
            self.lookups.lock().unwrap().push(ids.to_vec());
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|p| ids.contains(&p.id)).cloned().collect())
        }

        async fn update_quantity(
            &self,
            lines: &[OrderLine],
        ) -> Result<Vec<Product>, ProductError> {
            self.updates.lock().unwrap().push(lines.to_vec());
            if self.fail_update {
                return Err(ProductError::ActorCommunicationError("Actor closed".into()));
            }
            let mut rows = self.rows.lock().unwrap();
            for line in lines {
                if let Some(p) = rows.iter_mut().find(|p| p.id == line.product_id) {
                    *p = p.with_quantity(p.quantity.saturating_sub(line.quantity));
                }
            }
            Ok(rows.clone())
        }
    }

    #[derive(Default)]
    struct FakeOrders {
        created: Mutex<Vec<Order>>,
    }

    #[async_trait]
    impl OrdersRepository for FakeOrders {
        async fn create(&self, params: OrderCreate) -> Result<Order, OrderError> {
            let mut created = self.created.lock().unwrap();
            let order = Order {
                id: OrderId(created.len() as u32 + 1),
                customer: params.customer,
                products: params.products,
            };
            created.push(order.clone());
            Ok(order)
        }

        async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, OrderError> {
            unimplemented!()
        }
    }

    struct Fixture {
        customers: Arc<FakeCustomers>,
        products: Arc<FakeProducts>,
        orders: Arc<FakeOrders>,
        service: CreateOrderService,
    }

    /// Customer C1; P1 (price 10, qty 5) and P2 (price 20, qty 2).
    fn fixture(products: FakeProducts) -> Fixture {
        let customers = Arc::new(FakeCustomers {
            rows: vec![Customer::new(CustomerId(1), "C1", "c1@example.com")],
            ..Default::default()
        });
        let products = Arc::new(products);
        let orders = Arc::new(FakeOrders::default());
        let service = CreateOrderService::new(customers.clone(), products.clone(), orders.clone());
        Fixture {
            customers,
            products,
            orders,
            service,
        }
    }

    fn catalog() -> FakeProducts {
        FakeProducts::with(vec![
            Product::new(ProductId(1), "P1", 10.0, 5),
            Product::new(ProductId(2), "P2", 20.0, 2),
        ])
    }

    fn request(customer: u32, lines: &[(u32, u32)]) -> CreateOrderRequest {
        CreateOrderRequest::new(
            CustomerId(customer),
            lines
                .iter()
                .map(|&(id, qty)| OrderLine::new(ProductId(id), qty))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_places_order_with_catalog_prices() {
        let f = fixture(catalog());

        let order = f.service.execute(request(1, &[(1, 3), (2, 2)])).await.unwrap();

        assert_eq!(order.customer.id, CustomerId(1));
        assert_eq!(
            order.products,
            vec![
                OrderProduct {
                    product_id: ProductId(1),
                    quantity: 3,
                    price: 10.0
                },
                OrderProduct {
                    product_id: ProductId(2),
                    quantity: 2,
                    price: 20.0
                },
            ]
        );
        assert_eq!(order.total(), 70.0);
        assert_eq!(f.products.quantity_of(1), 2);
        assert_eq!(f.products.quantity_of(2), 0);

        let updates = f.products.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0], request(1, &[(1, 3), (2, 2)]).products);
    }

    #[tokio::test]
    async fn test_unknown_customer_stops_before_product_lookup() {
        let f = fixture(catalog());

        let err = f.service.execute(request(9, &[(1, 1)])).await.unwrap_err();

        assert_eq!(err, CreateOrderError::InvalidCustomer(CustomerId(9)));
        assert_eq!(*f.customers.lookups.lock().unwrap(), 1);
        assert!(f.products.lookups.lock().unwrap().is_empty());
        assert!(f.orders.created.lock().unwrap().is_empty());
        assert!(f.products.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_products_listed_in_request_order() {
        let f = fixture(catalog());

        let err = f
            .service
            .execute(request(1, &[(7, 1), (1, 1), (3, 1), (7, 2)]))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CreateOrderError::UnknownProducts(vec![ProductId(7), ProductId(3)])
        );
        assert_eq!(
            f.products.lookups.lock().unwrap()[0],
            vec![ProductId(7), ProductId(1), ProductId(3)]
        );
        assert!(f.orders.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_products_reported_before_stock() {
        let f = fixture(catalog());

        let err = f.service.execute(request(1, &[(2, 5), (8, 1)])).await.unwrap_err();

        assert_eq!(err, CreateOrderError::UnknownProducts(vec![ProductId(8)]));
    }

    #[tokio::test]
    async fn test_insufficient_stock_names_only_offenders() {
        let f = fixture(catalog());

        let err = f.service.execute(request(1, &[(1, 5), (2, 3)])).await.unwrap_err();

        assert_eq!(err, CreateOrderError::InsufficientStock(vec!["P2".into()]));
        assert!(f.orders.created.lock().unwrap().is_empty());
        assert!(f.products.updates.lock().unwrap().is_empty());
        assert_eq!(f.products.quantity_of(2), 2);
    }

    #[tokio::test]
    async fn test_duplicate_lines_can_oversell() {
        let f = fixture(catalog());

        // 3 + 3 exceeds P1's stock of 5, but each line alone fits.
        let order = f.service.execute(request(1, &[(1, 3), (1, 3)])).await.unwrap();

        assert_eq!(order.products.len(), 2);
        assert_eq!(order.products.iter().map(|p| p.quantity).sum::<u32>(), 6);
        assert_eq!(f.products.lookups.lock().unwrap()[0], vec![ProductId(1)]);
        assert_eq!(f.products.quantity_of(1), 0);
    }

    #[tokio::test]
    async fn test_repeat_order_fails_after_stock_drops() {
        let f = fixture(catalog());

        f.service.execute(request(1, &[(1, 3)])).await.unwrap();
        let err = f.service.execute(request(1, &[(1, 3)])).await.unwrap_err();

        assert_eq!(err, CreateOrderError::InsufficientStock(vec!["P1".into()]));
        assert_eq!(f.orders.created.lock().unwrap().len(), 1);
        assert_eq!(f.products.quantity_of(1), 2);
    }

    #[tokio::test]
    async fn test_invalid_request_stops_before_product_lookup() {
        let f = fixture(catalog());

        let empty = f.service.execute(request(1, &[])).await.unwrap_err();
        let zero = f.service.execute(request(1, &[(1, 0)])).await.unwrap_err();

        assert!(matches!(empty, CreateOrderError::InvalidRequest(_)));
        assert!(matches!(zero, CreateOrderError::InvalidRequest(_)));
        assert_eq!(*f.customers.lookups.lock().unwrap(), 2);
        assert!(f.products.lookups.lock().unwrap().is_empty());
        assert!(f.orders.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_customer_wins_over_invalid_lines() {
        let f = fixture(catalog());

        let empty = f.service.execute(request(9, &[])).await.unwrap_err();
        let zero = f.service.execute(request(9, &[(1, 0)])).await.unwrap_err();

        assert_eq!(empty, CreateOrderError::InvalidCustomer(CustomerId(9)));
        assert_eq!(zero, CreateOrderError::InvalidCustomer(CustomerId(9)));
        assert!(f.products.lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stock_update_failure_keeps_order() {
        let f = fixture(FakeProducts {
            fail_update: true,
            ..catalog()
        });

        let err = f.service.execute(request(1, &[(1, 1)])).await.unwrap_err();

        assert!(matches!(
            err,
            CreateOrderError::StockUpdateFailed { ref order_id, .. } if *order_id == OrderId(1)
        ));
        assert_eq!(f.orders.created.lock().unwrap().len(), 1);
    }
}
