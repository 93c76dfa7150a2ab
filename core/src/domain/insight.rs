// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Business Insight Value Objects
//!
//! Derived, never persisted. Recomputed from raw orders/products on each fetch.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LABEL_TOTAL_REVENUE: &str = "Total Revenue";
pub const LABEL_AVERAGE_ORDER_VALUE: &str = "Average Order Value";
pub const LABEL_TOTAL_PRODUCTS: &str = "Total Products";
pub const LABEL_TOTAL_ORDERS: &str = "Total Orders";
pub const LABEL_TOTAL_CUSTOMERS: &str = "Total Customers";

/// Which order count divides total revenue for the average order value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageBasis {
    /// Every record in the raw collection, including ones dropped from the
    /// aggregation set.
    #[default]
    RawOrders,
    /// Only records in the aggregation set.
    ValidOrders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InsightValue {
    Money(Decimal),
    Count(usize),
}

/// One labelled metric with its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub label: String,
    pub value: InsightValue,
    pub formatted: String,
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted)
    }
}

/// The five headline metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInsights {
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
    pub total_products: usize,
    pub total_orders: usize,
    pub total_customers: usize,
    pub currency_symbol: String,
}

impl BusinessInsights {
    /// Insights in display order: Total Revenue, Average Order Value,
    /// Total Products, Total Orders, Total Customers. UIs rely on this order.
    pub fn entries(&self) -> Vec<Insight> {
        let money = |label: &str, amount: Decimal| Insight {
            label: label.to_string(),
            value: InsightValue::Money(amount),
            formatted: format_money(amount, &self.currency_symbol),
        };
        let count = |label: &str, n: usize| Insight {
            label: label.to_string(),
            value: InsightValue::Count(n),
            formatted: n.to_string(),
        };

        vec![
            money(LABEL_TOTAL_REVENUE, self.total_revenue),
            money(LABEL_AVERAGE_ORDER_VALUE, self.average_order_value),
            count(LABEL_TOTAL_PRODUCTS, self.total_products),
            count(LABEL_TOTAL_ORDERS, self.total_orders),
            count(LABEL_TOTAL_CUSTOMERS, self.total_customers),
        ]
    }

    pub fn get(&self, label: &str) -> Option<Insight> {
        self.entries().into_iter().find(|i| i.label == label)
    }
}

/// Revenue summed for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: Decimal,
}

/// `"$1,234.56"`: thousands separators, two decimals, half away from zero.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{symbol}{grouped}.{frac}", if negative { "-" } else { "" })
}
