use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of an order.
///
/// The happy path is strictly linear, `ToPay -> ToShip -> ToReceive -> Completed`.
/// `Completed`, `Cancelled` and `ReturnRefund` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    ToPay,
    ToShip,
    ToReceive,
    Completed,
    Cancelled,
    ReturnRefund,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::ToPay,
        OrderStatus::ToShip,
        OrderStatus::ToReceive,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::ReturnRefund,
    ];

    /// Wire name, e.g. `to-pay`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::ToPay => "to-pay",
            OrderStatus::ToShip => "to-ship",
            OrderStatus::ToReceive => "to-receive",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::ReturnRefund => "return-refund",
        }
    }

    #[allow(dead_code)]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::ReturnRefund
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
