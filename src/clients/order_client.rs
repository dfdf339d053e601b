use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for the order store.
///
/// This is the only handle views get. It is cheap to clone and every clone talks
/// to the same store actor, so all views observe the same order list.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(requested_id = ?order.id))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<String, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(order).await?;
        info!(order_id = %id, "Order created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    /// All orders in insertion order.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Replaces the status of `id`.
    ///
    /// Returns `Ok(false)` when no such order exists; that case is not an error.
    #[instrument(skip(self))]
    pub async fn update_order_status(&self, id: String, status: OrderStatus) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::SetStatus(status)).await {
            Ok(OrderActionResult::SetStatus { previous }) => {
                info!(from = %previous, to = %status, "Order status updated");
                Ok(true)
            }
            Err(FrameworkError::NotFound(_)) => {
                debug!("Unknown order, update ignored");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn shutdown(&self) -> Result<(), OrderError> {
        Ok(self.inner.shutdown().await?)
    }
}
