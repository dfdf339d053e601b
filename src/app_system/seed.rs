use std::path::Path;
use tracing::{debug, instrument};
use crate::domain::{OrderCreate, OrderStatus, PaymentMethod, ProductRef};
use super::AppError;

/// Reads a JSON array of orders.
#[instrument]
pub async fn load_seed_file(path: &Path) -> Result<Vec<OrderCreate>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::SeedRead { path: path.to_path_buf(), source })?;
    let orders: Vec<OrderCreate> = serde_json::from_str(&raw)
        .map_err(|source| AppError::SeedParse { path: path.to_path_buf(), source })?;
    debug!(count = orders.len(), "Seed file parsed");
    Ok(orders)
}

/// Orders shown when no seed file is given, one or more per status.
pub fn demo_orders() -> Vec<OrderCreate> {
    vec![
        OrderCreate::new(
            ProductRef::new("Wireless Earbuds", "🎧").with_full_name("TWS Wireless Earbuds Bluetooth 5.3"),
            1,
            1299.0,
            "2025-01-12",
        )
        .with_id("A1")
        .with_payment(PaymentMethod::Cash),
        OrderCreate::new(ProductRef::new("Running Shoes", "👟"), 2, 3598.0, "2025-01-10")
            .with_id("A2")
            .with_status(OrderStatus::ToShip)
            .with_payment(PaymentMethod::Online),
        OrderCreate::new(ProductRef::new("Desk Lamp", "💡"), 1, 459.5, "2025-01-08")
            .with_id("A3")
            .with_status(OrderStatus::ToReceive),
        OrderCreate::new(ProductRef::new("Phone Case", "📱"), 3, 297.0, "2024-12-28")
            .with_id("A4")
            .with_status(OrderStatus::Completed)
            .with_payment(PaymentMethod::Cash),
        OrderCreate::new(ProductRef::new("Water Bottle", "🥤"), 1, 350.0, "2024-12-20")
            .with_id("A5")
            .with_status(OrderStatus::Cancelled),
        OrderCreate::new(ProductRef::new("Backpack", "🎒"), 1, 1150.0, "2024-12-15")
            .with_id("A6")
            .with_status(OrderStatus::ReturnRefund)
            .with_payment(PaymentMethod::Online),
    ]
}
