use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::lifecycle::SystemConfig;
use crate::service::CreateOrderService;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the order management system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the three stores
/// - **Dependency Wiring**: Handing the repository clients to [`CreateOrderService`]
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let customer = system.customer_client.create(customer_data).await?;
/// let order = system
///     .create_order
///     .execute(CreateOrderRequest::new(customer.id, lines))
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Repository over the Customer store
    pub customer_client: CustomerClient,

    /// Repository over the Product store
    pub product_client: ProductClient,

    /// Repository over the Order store
    pub order_client: OrderClient,

    /// The order placement workflow, wired to the clients above
    pub create_order: CreateOrderService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`].
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Spawns one actor per store and wires the service to their clients.
    pub fn with_config(config: SystemConfig) -> Self {
        let (customer_actor, customer_client) = crate::customer_actor::new(config.channel_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        let handles = vec![
            tokio::spawn(customer_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        let customer_client = CustomerClient::new(customer_client);
        let product_client = ProductClient::new(product_client);
        let order_client = OrderClient::new(order_client);

        let create_order = CreateOrderService::new(
            Arc::new(customer_client.clone()),
            Arc::new(product_client.clone()),
            Arc::new(order_client.clone()),
        );

        info!(channel_buffer = config.channel_buffer, "Order system started");
        Self {
            customer_client,
            product_client,
            order_client,
            create_order,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client (the service holds clones too) closes the
    /// channels; each actor then leaves its loop. Clones handed out to other
    /// tasks keep their actor alive, so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.create_order);
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
