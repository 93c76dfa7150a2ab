// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Order Domain
//!
//! An [`Order`] is a transient view over one raw record from `GET /orders`.
//! The raw JSON object is kept intact so the listing shows exactly what the
//! backend sent; typed accessors apply the numeric/date coercion rules used by
//! the analytics aggregator.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Order record view-model and the fixed status lifecycle

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::domain::coercion::{coerce_decimal, coerce_integer, parse_calendar_date};
use crate::domain::error::AdminError;

pub const FIELD_ORDER_ID: &str = "order_id";
pub const FIELD_CUSTOMER_ID: &str = "customer_id";
pub const FIELD_TOTAL_PRICE: &str = "total_price";
pub const FIELD_ORDER_DATE: &str = "order_date";
pub const FIELD_STATUS: &str = "status";

/// Fulfilment lifecycle of an order. The wire form is the human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Calling for Confirmation")]
    CallingForConfirmation,
    #[serde(rename = "Confirmed")]
    Confirmed,
    #[serde(rename = "Packing")]
    Packing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered (Waiting for DC to Call You)")]
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::CallingForConfirmation,
        OrderStatus::Confirmed,
        OrderStatus::Packing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::CallingForConfirmation => "Calling for Confirmation",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Packing => "Packing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered (Waiting for DC to Call You)",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AdminError;

    /// Exact label match. Anything else is rejected, including case variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                AdminError::invalid_argument(format!(
                    "'{s}' is not a valid order status (expected one of: {})",
                    OrderStatus::ALL
                        .iter()
                        .map(|st| st.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// One raw order record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order {
    raw: Map<String, Value>,
}

impl Order {
    pub fn from_raw(raw: Map<String, Value>) -> Self {
        Self { raw }
    }

    /// Build from any JSON value. Non-object values become an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(raw) => Self { raw },
            _ => Self::default(),
        }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }

    /// Whether the record carries `name` at all, regardless of its value.
    pub fn has_field(&self, name: &str) -> bool {
        self.raw.contains_key(name)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    pub fn order_id(&self) -> Option<i64> {
        self.raw.get(FIELD_ORDER_ID).and_then(coerce_integer)
    }

    pub fn customer_id(&self) -> Option<i64> {
        self.raw.get(FIELD_CUSTOMER_ID).and_then(coerce_integer)
    }

    /// `total_price` coerced to a number; non-numeric values are absent.
    pub fn total_price(&self) -> Option<Decimal> {
        self.raw.get(FIELD_TOTAL_PRICE).and_then(coerce_decimal)
    }

    pub fn order_date(&self) -> Option<NaiveDate> {
        self.raw.get(FIELD_ORDER_DATE).and_then(parse_calendar_date)
    }

    /// Status label exactly as stored by the backend.
    pub fn status_label(&self) -> Option<&str> {
        self.raw.get(FIELD_STATUS).and_then(Value::as_str)
    }

    /// Status parsed into the fixed lifecycle, if it is one of the known labels.
    pub fn status(&self) -> Option<OrderStatus> {
        self.status_label().and_then(|s| s.parse().ok())
    }

    /// String column by name; `None` when absent or not a string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.raw.get(name).and_then(Value::as_str)
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.text("customer_name")
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.text("customer_email")
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.text("phone_number")
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.text("payment_method")
    }

    /// Delivery location as "district, state" (either part may be missing).
    pub fn delivery_area(&self) -> Option<String> {
        let parts: Vec<&str> = [self.text("district"), self.text("state")]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }

    pub fn product_id(&self) -> Option<i64> {
        self.raw.get("product_id").and_then(coerce_integer)
    }

    pub fn quantity(&self) -> Option<i64> {
        self.raw.get("quantity").and_then(coerce_integer)
    }
}

impl From<Map<String, Value>> for Order {
    fn from(raw: Map<String, Value>) -> Self {
        Self::from_raw(raw)
    }
}
