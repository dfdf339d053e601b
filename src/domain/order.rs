use serde::{Deserialize, Serialize};
use super::{OrderStatus, ProductRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    #[serde(other)]
    Online,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash on Delivery",
            PaymentMethod::Online => "Online Payment",
        }
    }
}

/// A single purchase as tracked by the buyer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub product: ProductRef,
    pub quantity: u32,
    pub total_price: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Payload for creating a new order.
///
/// Seed data and checkout hand these to the store. `id` is optional; the store
/// generates one when it is absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub id: Option<String>,
    pub status: OrderStatus,
    pub product: ProductRef,
    pub quantity: u32,
    pub total_price: f64,
    pub date: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

impl OrderCreate {
    pub fn new(product: ProductRef, quantity: u32, total_price: f64, date: impl Into<String>) -> Self {
        Self {
            id: None,
            status: OrderStatus::ToPay,
            product,
            quantity,
            total_price,
            date: date.into(),
            payment_method: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Checks the order invariants the store relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity == 0 {
            return Err("quantity must be positive".to_string());
        }
        if !self.total_price.is_finite() || self.total_price < 0.0 {
            return Err(format!("total price must be non-negative, got {}", self.total_price));
        }
        if self.product.name.trim().is_empty() {
            return Err("product name required".to_string());
        }
        if matches!(self.id.as_deref(), Some(id) if id.trim().is_empty()) {
            return Err("order id must not be blank".to_string());
        }
        Ok(())
    }
}
