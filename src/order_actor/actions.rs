use crate::domain::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Replaces the order's status.
    ///
    /// No legality check is made here; any status may be set to any other.
    /// Forward-only transitions are the caller's concern.
    SetStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The status the order had before the change.
    SetStatus { previous: OrderStatus },
}
