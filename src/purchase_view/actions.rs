use std::fmt;
use std::str::FromStr;
use crate::domain::OrderStatus;

/// A button on an order card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseAction {
    PayNow,
    RiderPickedUp,
    ConfirmDelivery,
    Review,
    ViewStatus,
    Details,
}

impl PurchaseAction {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseAction::PayNow => "Pay Now",
            PurchaseAction::RiderPickedUp => "Rider Picked Up",
            PurchaseAction::ConfirmDelivery => "Confirm Delivery",
            PurchaseAction::Review => "Review",
            PurchaseAction::ViewStatus => "View Status",
            PurchaseAction::Details => "Details",
        }
    }

    /// Command word used by the terminal front-end.
    pub fn command(&self) -> &'static str {
        match self {
            PurchaseAction::PayNow => "pay",
            PurchaseAction::RiderPickedUp => "pickup",
            PurchaseAction::ConfirmDelivery => "deliver",
            PurchaseAction::Review => "review",
            PurchaseAction::ViewStatus => "view-status",
            PurchaseAction::Details => "details",
        }
    }

    /// Status the order moves to when this button is pressed, if any.
    pub fn target(&self) -> Option<OrderStatus> {
        match self {
            PurchaseAction::PayNow => Some(OrderStatus::ToShip),
            PurchaseAction::RiderPickedUp => Some(OrderStatus::ToReceive),
            PurchaseAction::ConfirmDelivery => Some(OrderStatus::Completed),
            PurchaseAction::Review | PurchaseAction::ViewStatus | PurchaseAction::Details => None,
        }
    }

    /// The status-specific button shown for `status`. Cancelled orders get none.
    pub fn primary_for(status: OrderStatus) -> Option<PurchaseAction> {
        match status {
            OrderStatus::ToPay => Some(PurchaseAction::PayNow),
            OrderStatus::ToShip => Some(PurchaseAction::RiderPickedUp),
            OrderStatus::ToReceive => Some(PurchaseAction::ConfirmDelivery),
            OrderStatus::Completed => Some(PurchaseAction::Review),
            OrderStatus::ReturnRefund => Some(PurchaseAction::ViewStatus),
            OrderStatus::Cancelled => None,
        }
    }

    /// Every button on a card for `status`, in display order.
    pub fn shown_for(status: OrderStatus) -> Vec<PurchaseAction> {
        PurchaseAction::primary_for(status)
            .into_iter()
            .chain(std::iter::once(PurchaseAction::Details))
            .collect()
    }
}

impl fmt::Display for PurchaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for PurchaseAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            PurchaseAction::PayNow,
            PurchaseAction::RiderPickedUp,
            PurchaseAction::ConfirmDelivery,
            PurchaseAction::Review,
            PurchaseAction::ViewStatus,
            PurchaseAction::Details,
        ]
        .into_iter()
        .find(|action| action.command() == s)
        .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Status an order in `current` ends up in after `action`.
///
/// `None` when the button is not shown for `current` or does not transition.
pub fn transition(current: OrderStatus, action: PurchaseAction) -> Option<OrderStatus> {
    if PurchaseAction::primary_for(current) != Some(action) {
        return None;
    }
    action.target()
}
