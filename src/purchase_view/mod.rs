//! The buyer's "My Purchase" screen: tab filtering, order cards and the
//! buttons that move an order along its lifecycle.

mod actions;
mod events;
mod presentation;
mod render;
mod tab;

pub use actions::*;
pub use events::*;
pub use presentation::*;
pub use render::*;
pub use tab::*;

use tracing::{debug, info, instrument};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderStatus};
use crate::order_actor::OrderError;

/// What happened when a button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Transitioned { from: OrderStatus, to: OrderStatus },
    /// The button is shown but does not change the order (Review, View Status, Details).
    NoTransition,
    /// The button is not shown for the order's current status.
    NotOffered,
    UnknownOrder,
}

/// Screen state. The order store is injected; the view only keeps what is on screen.
pub struct PurchaseView {
    orders: OrderClient,
    active_tab: Tab,
    renderer: Renderer,
}

impl PurchaseView {
    pub fn new(orders: OrderClient) -> Self {
        Self {
            orders,
            active_tab: Tab::default(),
            renderer: Renderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[allow(dead_code)]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(tab = %tab, "Tab selected");
        self.active_tab = tab;
    }

    /// Orders under the active tab, read fresh from the store.
    pub async fn visible_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.list_orders().await?;
        Ok(filter_orders(&orders, self.active_tab).into_iter().cloned().collect())
    }

    /// Handles a button press on the card for `order_id`.
    ///
    /// Only the button shown for the order's current status has any effect, so
    /// orders only ever move forward along the happy path.
    #[instrument(skip(self))]
    pub async fn press(&self, order_id: &str, action: PurchaseAction) -> Result<DispatchOutcome, OrderError> {
        let Some(order) = self.orders.get_order(order_id.to_string()).await? else {
            debug!("Unknown order");
            return Ok(DispatchOutcome::UnknownOrder);
        };

        if !PurchaseAction::shown_for(order.status).contains(&action) {
            debug!(status = %order.status, "Button not offered for this status");
            return Ok(DispatchOutcome::NotOffered);
        }

        let Some(to) = transition(order.status, action) else {
            return Ok(DispatchOutcome::NoTransition);
        };

        if !self.orders.update_order_status(order.id, to).await? {
            return Ok(DispatchOutcome::UnknownOrder);
        }
        info!(from = %order.status, to = %to, "Order advanced");
        Ok(DispatchOutcome::Transitioned { from: order.status, to })
    }

    /// Full record of one order as pretty JSON, for the Details button.
    pub async fn details(&self, order_id: &str) -> Result<Option<String>, OrderError> {
        let Some(order) = self.orders.get_order(order_id.to_string()).await? else {
            return Ok(None);
        };
        serde_json::to_string_pretty(&order)
            .map(Some)
            .map_err(|e| OrderError::ValidationError(e.to_string()))
    }

    pub async fn render(&self) -> Result<String, OrderError> {
        let visible = self.visible_orders().await?;
        Ok(self.renderer.screen(self.active_tab, &visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::Entity;
    use crate::domain::{OrderCreate, ProductRef};
    use crate::mock_framework::{create_mock_client, expect_action, expect_get, expect_list};
    use crate::order_actor::{OrderAction, OrderActionResult};

    fn order(id: &str, status: OrderStatus) -> Order {
        let payload = OrderCreate::new(ProductRef::new("Kettle", "🫖"), 1, 1200.0, "2025-05-05").with_status(status);
        Order::from_create(id.to_string(), payload).unwrap()
    }

    #[tokio::test]
    async fn test_render_reads_live_list_each_time() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let mut view = PurchaseView::new(OrderClient::new(inner));
        view.select_tab(Tab::Status(OrderStatus::ToPay));

        let task = tokio::spawn(async move {
            let first = view.render().await.unwrap();
            let second = view.render().await.unwrap();
            (first, second)
        });

        let responder = expect_list(&mut receiver).await.expect("Expected List");
        responder.send(Ok(vec![order("K1", OrderStatus::ToPay), order("K2", OrderStatus::ToShip)])).unwrap();
        let responder = expect_list(&mut receiver).await.expect("Expected List");
        responder.send(Ok(vec![order("K1", OrderStatus::ToShip), order("K2", OrderStatus::ToShip)])).unwrap();

        let (first, second) = task.await.unwrap();
        assert!(first.contains("Order ID: K1"));
        assert!(!first.contains("Order ID: K2"));
        assert!(second.contains("No orders yet"));
    }

    #[tokio::test]
    async fn test_press_sends_forward_transition_only() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let view = PurchaseView::new(OrderClient::new(inner));

        let task = tokio::spawn(async move { view.press("K1", PurchaseAction::RiderPickedUp).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get");
        assert_eq!(id, "K1");
        responder.send(Ok(Some(order("K1", OrderStatus::ToShip)))).unwrap();

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action");
        assert_eq!(id, "K1");
        assert_eq!(action, OrderAction::SetStatus(OrderStatus::ToReceive));
        responder.send(Ok(OrderActionResult::SetStatus { previous: OrderStatus::ToShip })).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Ok(DispatchOutcome::Transitioned { from: OrderStatus::ToShip, to: OrderStatus::ToReceive })
        );
    }

    #[tokio::test]
    async fn test_press_on_terminal_order_sends_no_update() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let view = PurchaseView::new(OrderClient::new(inner));

        let task = tokio::spawn(async move { view.press("K9", PurchaseAction::ViewStatus).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get");
        responder.send(Ok(Some(order("K9", OrderStatus::ReturnRefund)))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(DispatchOutcome::NoTransition));
        // The view dropped its client when the task ended; no update was queued.
        assert!(receiver.recv().await.is_none());
    }
}
