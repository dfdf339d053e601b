use std::fmt;
use std::str::FromStr;
use crate::domain::{Order, OrderStatus, UnknownStatus};

/// Filter selecting which orders the purchase screen lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    All,
    Status(OrderStatus),
}

impl Tab {
    /// Tab bar order.
    pub const ALL: [Tab; 7] = [
        Tab::All,
        Tab::Status(OrderStatus::ToPay),
        Tab::Status(OrderStatus::ToShip),
        Tab::Status(OrderStatus::ToReceive),
        Tab::Status(OrderStatus::Completed),
        Tab::Status(OrderStatus::Cancelled),
        Tab::Status(OrderStatus::ReturnRefund),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Status(status) => status.as_str(),
        }
    }

    /// Caption on the tab bar. Differs from the status badge for `return-refund`.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Status(OrderStatus::ToPay) => "To Pay",
            Tab::Status(OrderStatus::ToShip) => "To Ship",
            Tab::Status(OrderStatus::ToReceive) => "To Receive",
            Tab::Status(OrderStatus::Completed) => "Completed",
            Tab::Status(OrderStatus::Cancelled) => "Cancelled",
            Tab::Status(OrderStatus::ReturnRefund) => "Return Refund",
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            Tab::All => true,
            Tab::Status(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Tab::All),
            other => other.parse().map(Tab::Status),
        }
    }
}

/// Orders visible under `tab`, in their original relative order.
pub fn filter_orders(orders: &[Order], tab: Tab) -> Vec<&Order> {
    orders.iter().filter(|order| tab.matches(order.status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::Entity;
    use crate::domain::{OrderCreate, ProductRef};

    fn order(id: &str, status: OrderStatus) -> Order {
        let payload = OrderCreate::new(ProductRef::new(id, "📦"), 1, 10.0, "2025-01-01").with_status(status);
        Order::from_create(id.to_string(), payload).unwrap()
    }

    fn ids(orders: Vec<&Order>) -> Vec<&str> {
        orders.into_iter().map(|o| o.id.as_str()).collect()
    }

    fn mixed() -> Vec<Order> {
        vec![
            order("o1", OrderStatus::ToPay),
            order("o2", OrderStatus::Completed),
            order("o3", OrderStatus::ToPay),
            order("o4", OrderStatus::ReturnRefund),
            order("o5", OrderStatus::ToShip),
            order("o6", OrderStatus::Completed),
        ]
    }

    #[test]
    fn test_all_tab_returns_everything_in_order() {
        let orders = mixed();
        assert_eq!(ids(filter_orders(&orders, Tab::All)), vec!["o1", "o2", "o3", "o4", "o5", "o6"]);
    }

    #[test]
    fn test_status_tabs_return_exact_subset_in_order() {
        let orders = mixed();
        for tab in Tab::ALL.into_iter().skip(1) {
            let visible = filter_orders(&orders, tab);
            let expected: Vec<&str> = orders
                .iter()
                .filter(|o| Tab::Status(o.status) == tab)
                .map(|o| o.id.as_str())
                .collect();
            assert_eq!(ids(visible), expected, "tab {}", tab);
        }
        assert_eq!(ids(filter_orders(&orders, Tab::Status(OrderStatus::ToPay))), vec!["o1", "o3"]);
        assert!(filter_orders(&orders, Tab::Status(OrderStatus::Cancelled)).is_empty());
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(Tab::default(), Tab::All);
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>(), Ok(tab));
        }
        assert_eq!(Tab::Status(OrderStatus::ReturnRefund).label(), "Return Refund");
        assert!("everything".parse::<Tab>().is_err());
    }
}
