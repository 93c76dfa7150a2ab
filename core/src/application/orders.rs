// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Order Resource Manager
//!
//! List, status transition and delete over `/orders`. Status labels are
//! checked against [`OrderStatus`] before any request leaves the process.

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::listing::{decode_record, decode_records, Listing};
use crate::domain::error::{AdminError, AdminResult};
use crate::domain::order::{Order, OrderStatus, FIELD_STATUS};
use crate::domain::resource::{RequestBody, ResourceClient};

const ORDERS_PATH: &str = "/orders";

fn order_path(order_id: i64) -> String {
    format!("{ORDERS_PATH}/{order_id}")
}

fn ensure_order_id(order_id: i64) -> AdminResult<()> {
    if order_id <= 0 {
        return Err(AdminError::invalid_argument(format!(
            "order_id must be a positive integer (got {order_id})"
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct OrderManager {
    client: Arc<dyn ResourceClient>,
}

impl OrderManager {
    pub fn new(client: Arc<dyn ResourceClient>) -> Self {
        Self { client }
    }

    /// Fetch all orders as raw records. Never fails: errors come back inside
    /// the listing.
    pub async fn list(&self) -> Listing<Order> {
        let result = self.fetch_all().await;
        if let Err(e) = &result {
            warn!("Failed to list orders: {}", e);
        }
        Listing::from_result(result)
    }

    async fn fetch_all(&self) -> AdminResult<Vec<Order>> {
        let value = self.client.get(ORDERS_PATH).await?;
        let orders: Vec<Order> = decode_records(value, "order", Order::from_value)?;
        debug!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    pub async fn get(&self, order_id: i64) -> AdminResult<Order> {
        ensure_order_id(order_id)?;
        let value = self.client.get(&order_path(order_id)).await?;
        decode_record(value, "order")
    }

    /// Move an order to `status`, which must be one of the six fixed labels
    /// (exact, case-sensitive).
    pub async fn update_status(&self, order_id: i64, status: &str) -> AdminResult<Value> {
        ensure_order_id(order_id)?;
        let status: OrderStatus = status.parse()?;
        self.set_status(order_id, status).await
    }

    /// Typed variant of [`Self::update_status`].
    pub async fn set_status(&self, order_id: i64, status: OrderStatus) -> AdminResult<Value> {
        ensure_order_id(order_id)?;
        let body = json!({ FIELD_STATUS: status.as_str() });
        let response = self
            .client
            .put(&order_path(order_id), RequestBody::Json(body))
            .await?;
        info!("Order {} status set to '{}'", order_id, status);
        Ok(response)
    }

    pub async fn delete(&self, order_id: i64) -> AdminResult<Value> {
        ensure_order_id(order_id)?;
        let response = self.client.delete(&order_path(order_id)).await?;
        info!("Deleted order {}", order_id);
        Ok(response)
    }
}

impl std::fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderManager").finish_non_exhaustive()
    }
}
