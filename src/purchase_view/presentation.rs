//! Status badges and money formatting.

use crate::domain::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Package,
    Truck,
    CheckCircle,
    XCircle,
    Rotate,
}

impl StatusIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::Package => "📦",
            StatusIcon::Truck => "🚚",
            StatusIcon::CheckCircle => "✔",
            StatusIcon::XCircle => "✘",
            StatusIcon::Rotate => "↻",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Orange,
    Blue,
    Purple,
    Green,
    Red,
    Yellow,
}

impl Tone {
    /// ANSI SGR foreground sequence.
    pub fn ansi(&self) -> &'static str {
        match self {
            Tone::Neutral => "\x1b[39m",
            Tone::Orange => "\x1b[38;5;208m",
            Tone::Blue => "\x1b[34m",
            Tone::Purple => "\x1b[35m",
            Tone::Green => "\x1b[32m",
            Tone::Red => "\x1b[31m",
            Tone::Yellow => "\x1b[33m",
        }
    }
}

/// How a status is shown on an order card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub icon: Option<StatusIcon>,
    pub tone: Tone,
}

impl StatusDescriptor {
    /// Shown for anything that is not a known status.
    pub const NEUTRAL: StatusDescriptor = StatusDescriptor {
        label: "",
        icon: None,
        tone: Tone::Neutral,
    };

    const fn new(label: &'static str, icon: StatusIcon, tone: Tone) -> Self {
        Self { label, icon: Some(icon), tone }
    }
}

// Single source for both the badge label and its icon.
const DESCRIPTORS: [(OrderStatus, StatusDescriptor); 6] = [
    (OrderStatus::ToPay, StatusDescriptor::new("To Pay", StatusIcon::Package, Tone::Orange)),
    (OrderStatus::ToShip, StatusDescriptor::new("To Ship", StatusIcon::Package, Tone::Blue)),
    (OrderStatus::ToReceive, StatusDescriptor::new("To Receive", StatusIcon::Truck, Tone::Purple)),
    (OrderStatus::Completed, StatusDescriptor::new("Completed", StatusIcon::CheckCircle, Tone::Green)),
    (OrderStatus::Cancelled, StatusDescriptor::new("Cancelled", StatusIcon::XCircle, Tone::Red)),
    (OrderStatus::ReturnRefund, StatusDescriptor::new("Return/Refund", StatusIcon::Rotate, Tone::Yellow)),
];

pub fn describe(status: OrderStatus) -> StatusDescriptor {
    DESCRIPTORS
        .iter()
        .find(|(known, _)| *known == status)
        .map(|(_, descriptor)| *descriptor)
        .unwrap_or(StatusDescriptor::NEUTRAL)
}

/// Lookup by wire name. Unknown names get [`StatusDescriptor::NEUTRAL`].
#[allow(dead_code)]
pub fn describe_raw(raw: &str) -> StatusDescriptor {
    raw.parse::<OrderStatus>()
        .map(describe)
        .unwrap_or(StatusDescriptor::NEUTRAL)
}

/// Formats an amount in pesos with thousands separators and at most three
/// fraction digits, trailing zeros dropped: `1234.5` becomes `₱1,234.5`.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let millis = (amount.abs() * 1000.0).round() as u64;
    let whole = millis / 1000;
    let fraction = millis % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative && millis > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}₱{grouped}")
    } else {
        let fraction = format!("{fraction:03}");
        format!("{sign}₱{grouped}.{}", fraction.trim_end_matches('0'))
    }
}
