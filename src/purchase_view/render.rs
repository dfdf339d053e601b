//! Plain-text rendering of the purchase screen.

use std::fmt::Write;
use crate::domain::Order;
use super::actions::PurchaseAction;
use super::presentation::{describe, format_price, Tone};
use super::tab::Tab;

const RESET: &str = "\x1b[0m";
const RULE: &str = "────────────────────────────────────────────────────────────";

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.color && tone != Tone::Neutral {
            format!("{}{}{}", tone.ansi(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Tab bar with the active tab bracketed.
    pub fn tab_bar(&self, active: Tab) -> String {
        Tab::ALL
            .iter()
            .map(|tab| {
                if *tab == active {
                    self.paint(Tone::Orange, &format!("[{}]", tab.label()))
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn order_card(&self, order: &Order) -> String {
        let mut out = String::new();
        let descriptor = describe(order.status);
        let image = if order.product.has_remote_image() {
            "[img]"
        } else {
            order.product.image.as_str()
        };

        let _ = writeln!(out, "{} {}", image, order.product.display_name());
        if let Some(method) = order.payment_method {
            let _ = writeln!(out, "   Payment: {}", method.label());
        }
        let _ = writeln!(out, "   Order ID: {}", order.id);
        let _ = writeln!(out, "   Order Date: {}", order.date);
        let _ = writeln!(out, "   Quantity: {}", order.quantity);

        let badge = match descriptor.icon {
            Some(icon) => format!("{} {}", icon.glyph(), descriptor.label),
            None => descriptor.label.to_string(),
        };
        let _ = writeln!(out, "   Status: {}", self.paint(descriptor.tone, &badge));
        let _ = writeln!(
            out,
            "   Total Price: {}",
            self.paint(Tone::Orange, &format_price(order.total_price))
        );

        let buttons: Vec<String> = PurchaseAction::shown_for(order.status)
            .into_iter()
            .map(|action| format!("[{}]", action.label()))
            .collect();
        let _ = writeln!(out, "   {}", buttons.join(" "));
        out
    }

    /// The whole screen: tab bar, then every visible order or the empty notice.
    pub fn screen(&self, active: Tab, visible: &[Order]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.tab_bar(active));
        let _ = writeln!(out, "{RULE}");

        if visible.is_empty() {
            let _ = writeln!(out, "   📦 No orders yet");
            let _ = writeln!(out, "{RULE}");
            return out;
        }

        for order in visible {
            out.push_str(&self.order_card(order));
            let _ = writeln!(out, "{RULE}");
        }
        out
    }
}
