use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String { &self.id }

    fn requested_id(payload: &OrderCreate) -> Option<String> {
        payload.id.clone()
    }

    /// Creates a new Order from creation parameters.
    ///
    /// # Errors
    /// Rejects payloads with a zero quantity, a negative or non-finite price,
    /// or a blank product name.
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, String> {
        payload.validate()?;
        Ok(Self {
            id,
            status: payload.status,
            product: payload.product,
            quantity: payload.quantity,
            total_price: payload.total_price,
            date: payload.date,
            payment_method: payload.payment_method,
        })
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::SetStatus(status) => {
                let previous = std::mem::replace(&mut self.status, status);
                Ok(OrderActionResult::SetStatus { previous })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderStatus, ProductRef};

    fn order(status: OrderStatus) -> Order {
        let payload = OrderCreate::new(ProductRef::new("Lamp", "💡"), 1, 250.0, "2025-02-01")
            .with_status(status);
        Order::from_create("A1".to_string(), payload).unwrap()
    }

    #[test]
    fn test_set_status_is_unchecked() {
        let mut completed = order(OrderStatus::Completed);
        let result = completed.handle_action(OrderAction::SetStatus(OrderStatus::ToPay));
        assert_eq!(result, Ok(OrderActionResult::SetStatus { previous: OrderStatus::Completed }));
        assert_eq!(completed.status, OrderStatus::ToPay);
    }

    #[test]
    fn test_from_create_keeps_requested_fields() {
        let created = order(OrderStatus::ToShip);
        assert_eq!(created.id(), "A1");
        assert_eq!(created.status, OrderStatus::ToShip);
        assert_eq!(created.quantity, 1);
    }
}
