// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Order management commands
//!
//! Commands: list, show, status, delete

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use serde_json::Value;

use storefront_admin_core::domain::insight::format_money;
use storefront_admin_core::{AdminServices, Order, OrderStatus};

#[derive(Subcommand)]
pub enum OrderCommand {
    /// List all orders
    List {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one order
    Show {
        #[arg(value_name = "ORDER_ID")]
        order_id: i64,
    },

    /// Set the fulfilment status of an order
    Status {
        #[arg(value_name = "ORDER_ID")]
        order_id: i64,

        /// One of the status labels, quoted (e.g. "Out for Delivery")
        #[arg(value_name = "STATUS")]
        status: String,
    },

    /// Delete an order
    Delete {
        #[arg(value_name = "ORDER_ID")]
        order_id: i64,
    },
}

pub async fn handle_command(command: OrderCommand, services: &AdminServices) -> Result<()> {
    match command {
        OrderCommand::List { json } => list(services, json).await,
        OrderCommand::Show { order_id } => show(services, order_id).await,
        OrderCommand::Status { order_id, status } => set_status(services, order_id, &status).await,
        OrderCommand::Delete { order_id } => delete(services, order_id).await,
    }
}

async fn list(services: &AdminServices, as_json: bool) -> Result<()> {
    let listing = services.orders().list().await;
    if let Some(e) = &listing.error {
        bail!("Failed to fetch orders: {}", e);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&listing.items)?);
        return Ok(());
    }

    if listing.is_empty() {
        println!("{}", "No orders found".yellow());
        return Ok(());
    }

    let symbol = &services.config().analytics.currency_symbol;
    println!("{} orders found:", listing.len());
    println!(
        "{:<8} {:<10} {:>12} {:<12} {}",
        "ID", "CUSTOMER", "TOTAL", "DATE", "STATUS"
    );
    for order in &listing.items {
        println!(
            "{:<8} {:<10} {:>12} {:<12} {}",
            display_or_dash(order.order_id()),
            display_or_dash(order.customer_id()),
            order
                .total_price()
                .map(|p| format_money(p, symbol))
                .unwrap_or_else(|| raw_or_dash(order, "total_price")),
            order
                .order_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| raw_or_dash(order, "order_date")),
            status_text(order)
        );
    }

    Ok(())
}

async fn show(services: &AdminServices, order_id: i64) -> Result<()> {
    let order = services
        .orders()
        .get(order_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch order {}: {}", order_id, e))?;

    println!("{}", format!("Order {}", order_id).bold());
    println!("  Status: {}", status_text(&order));
    for (key, value) in order.raw() {
        if key == "status" {
            continue;
        }
        println!("  {}: {}", key, scalar_text(value));
    }
    if let Some(area) = order.delivery_area() {
        println!("  Deliver to: {}", area);
    }
    Ok(())
}

async fn set_status(services: &AdminServices, order_id: i64, status: &str) -> Result<()> {
    services
        .orders()
        .update_status(order_id, status)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update order {}: {}", order_id, e))?;

    println!(
        "{}",
        format!("✓ Order {} status set to '{}'", order_id, status).green()
    );
    Ok(())
}

async fn delete(services: &AdminServices, order_id: i64) -> Result<()> {
    services
        .orders()
        .delete(order_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete order {}: {}", order_id, e))?;

    println!("{}", format!("✓ Order {} deleted", order_id).green());
    Ok(())
}

fn status_text(order: &Order) -> String {
    match (order.status(), order.status_label()) {
        (Some(OrderStatus::Delivered), _) => OrderStatus::Delivered.to_string().green().to_string(),
        (Some(status), _) => status.to_string(),
        (None, Some(label)) => format!("{} {}", label, "(unknown)".dimmed()),
        (None, None) => "-".to_string(),
    }
}

fn display_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn raw_or_dash(order: &Order, field: &str) -> String {
    order.field(field).map(scalar_text).unwrap_or_else(|| "-".to_string())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unparseable_values_are_shown_raw() {
        let order = Order::from_value(json!({"total_price": "bad", "status": "Shipped"}));
        assert_eq!(raw_or_dash(&order, "total_price"), "bad");
        assert_eq!(raw_or_dash(&order, "order_date"), "-");
    }

    #[test]
    fn scalar_text_unquotes_strings() {
        assert_eq!(scalar_text(&json!("Colombo")), "Colombo");
        assert_eq!(scalar_text(&json!(12)), "12");
        assert_eq!(scalar_text(&Value::Null), "-");
    }

    #[test]
    fn status_text_marks_unknown_labels() {
        colored::control::set_override(false);
        let known = Order::from_value(json!({"status": "Packing"}));
        let unknown = Order::from_value(json!({"status": "Shipped"}));
        assert_eq!(status_text(&known), "Packing");
        assert_eq!(status_text(&unknown), "Shipped (unknown)");
        assert_eq!(status_text(&Order::default()), "-");
    }
}
