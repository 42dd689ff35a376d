//! Demo: seed a customer and two products, place one order that succeeds and
//! one that is rejected for lack of stock, then shut down.

use order_recipe::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use order_recipe::model::{CustomerCreate, OrderLine, ProductCreate};
use order_recipe::repository::{CustomersRepository, ProductsRepository};
use order_recipe::service::CreateOrderRequest;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!("Starting application with complete order system");
    let system = OrderSystem::with_config(config);

    let span = tracing::info_span!("seeding");
    let (customer, p1, p2) = async {
        let customer = system
            .customer_client
            .create(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        let p1 = system
            .product_client
            .create(ProductCreate {
                name: "P1".to_string(),
                price: 10.0,
                quantity: 5,
            })
            .await
            .map_err(|e| e.to_string())?;
        let p2 = system
            .product_client
            .create(ProductCreate {
                name: "P2".to_string(),
                price: 20.0,
                quantity: 2,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((customer, p1, p2))
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer.id, p1 = %p1.id, p2 = %p2.id, "Catalog seeded");

    let orders = [
        vec![OrderLine::new(p1.id.clone(), 3), OrderLine::new(p2.id.clone(), 2)],
        // P1 has 2 left now.
        vec![OrderLine::new(p1.id.clone(), 3)],
    ];

    for lines in orders {
        let span = tracing::info_span!("order_processing");
        let result = system
            .create_order
            .execute(CreateOrderRequest::new(customer.id.clone(), lines))
            .instrument(span)
            .await;

        match result {
            Ok(order) => info!(order_id = %order.id, total = order.total(), "Order processed successfully"),
            Err(e) => error!(error = %e, "Order processing failed"),
        }
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
