use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::OrderClient;
use crate::domain::{Order, OrderCreate};
use super::{AppError, DEFAULT_CHANNEL_CAPACITY};

/// Owns the order store task and hands out clients to it.
///
/// Views never reach the store through globals; they are given a clone of
/// `order_client`.
pub struct PurchaseSystem {
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for PurchaseSystem {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl PurchaseSystem {
    #[instrument(name = "purchase_system")]
    pub fn new(channel_capacity: usize) -> Self {
        info!("Starting purchase system");

        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || {
            let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("order_{}", id)
        };

        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(channel_capacity, next_order_id);
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    /// Inserts `orders` in the given order. Stops at the first rejected one.
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub async fn seed(&self, orders: Vec<OrderCreate>) -> Result<usize, AppError> {
        for (index, order) in orders.into_iter().enumerate() {
            self.order_client
                .create_order(order)
                .await
                .map_err(|source| AppError::SeedRejected { index, source })?;
        }
        let seeded = self.order_client.list_orders().await?.len();
        info!(seeded, "Order store seeded");
        Ok(seeded)
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down purchase system");

        // The store may already be gone; waiting on the handle reports that.
        let _ = self.order_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store task failed");
                return Err(AppError::Task(e.to_string()));
            }
        }

        info!("Purchase system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderStatus, ProductRef};

    #[tokio::test]
    async fn test_seed_then_generated_ids() {
        let system = PurchaseSystem::default();
        let seeded = system
            .seed(vec![
                OrderCreate::new(ProductRef::new("Fan", "🌀"), 1, 899.0, "2025-04-01").with_id("A1"),
                OrderCreate::new(ProductRef::new("Cable", "🔌"), 3, 150.0, "2025-04-02"),
            ])
            .await
            .unwrap();
        assert_eq!(seeded, 2);

        let ids: Vec<String> = system.order_client.list_orders().await.unwrap()
            .into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["A1", "order_1"]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_reports_rejected_index() {
        let system = PurchaseSystem::new(4);
        let result = system
            .seed(vec![
                OrderCreate::new(ProductRef::new("Fan", "🌀"), 1, 899.0, "2025-04-01").with_id("A1"),
                OrderCreate::new(ProductRef::new("Fan", "🌀"), 1, 899.0, "2025-04-01").with_id("A1"),
            ])
            .await;
        assert!(matches!(result, Err(AppError::SeedRejected { index: 1, .. })));

        let only = system.order_client.get_order("A1".to_string()).await.unwrap().unwrap();
        assert_eq!(only.status, OrderStatus::ToPay);
        system.shutdown().await.unwrap();
    }
}
