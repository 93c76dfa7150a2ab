// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Order Analytics Aggregator
//!
//! Turns a raw order collection plus a product count into the five headline
//! insights and a revenue-by-date series.
//!
//! Records whose `total_price` is not numeric or whose `order_date` cannot be
//! read as a calendar date are dropped from the aggregation set before any
//! summing. Total Orders still counts every raw record.
//!
//! Pure computation: no I/O, the input is never mutated, and the output is
//! rebuilt from scratch on every call.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::domain::config::AnalyticsConfig;
use crate::domain::error::{AdminError, AdminResult};
use crate::domain::insight::{AverageBasis, BusinessInsights, RevenuePoint};
use crate::domain::order::{Order, FIELD_ORDER_DATE, FIELD_TOTAL_PRICE};

/// Output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAnalytics {
    pub insights: BusinessInsights,

    /// One point per distinct date, ascending.
    pub revenue_by_date: Vec<RevenuePoint>,

    pub raw_order_count: usize,
    pub valid_order_count: usize,

    /// Records dropped for a non-numeric price or unreadable date.
    pub filtered_records: usize,
}

#[derive(Debug, Clone, Default)]
pub struct OrderAnalyticsAggregator {
    config: AnalyticsConfig,
}

impl OrderAnalyticsAggregator {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Compute insights for `orders`.
    ///
    /// # Errors
    ///
    /// [`AdminError::MissingField`] when the collection is non-empty and no
    /// record carries `total_price` or `order_date` at all.
    pub fn aggregate(&self, orders: &[Order], total_products: usize) -> AdminResult<OrderAnalytics> {
        ensure_field_present(orders, FIELD_TOTAL_PRICE)?;
        ensure_field_present(orders, FIELD_ORDER_DATE)?;

        let mut total_revenue = Decimal::ZERO;
        let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        let mut customers: HashSet<i64> = HashSet::new();
        let mut valid = 0usize;
        let mut filtered = 0usize;

        for order in orders {
            let (Some(price), Some(date)) = (order.total_price(), order.order_date()) else {
                debug!(
                    order_id = ?order.order_id(),
                    "Dropping order with non-numeric total_price or unreadable order_date"
                );
                filtered += 1;
                continue;
            };

            let day_total = by_date.get(&date).copied().unwrap_or(Decimal::ZERO);
            let (Some(next_total), Some(next_day)) =
                (total_revenue.checked_add(price), day_total.checked_add(price))
            else {
                warn!(
                    order_id = ?order.order_id(),
                    "Dropping order whose total_price overflows the revenue sum"
                );
                filtered += 1;
                continue;
            };

            valid += 1;
            total_revenue = next_total;
            by_date.insert(date, next_day);
            if let Some(customer_id) = order.customer_id() {
                customers.insert(customer_id);
            }
        }

        if filtered > 0 {
            warn!(
                "{} of {} order records excluded from revenue aggregation",
                filtered,
                orders.len()
            );
        }

        let divisor = match self.config.average_basis {
            AverageBasis::RawOrders => orders.len(),
            AverageBasis::ValidOrders => valid,
        };
        let average_order_value = if divisor == 0 {
            Decimal::ZERO
        } else {
            total_revenue / Decimal::from(divisor)
        };

        let revenue_by_date = by_date
            .into_iter()
            .map(|(date, revenue)| RevenuePoint { date, revenue })
            .collect();

        Ok(OrderAnalytics {
            insights: BusinessInsights {
                total_revenue,
                average_order_value,
                total_products,
                total_orders: orders.len(),
                total_customers: customers.len(),
                currency_symbol: self.config.currency_symbol.clone(),
            },
            revenue_by_date,
            raw_order_count: orders.len(),
            valid_order_count: valid,
            filtered_records: filtered,
        })
    }
}

fn ensure_field_present(orders: &[Order], field: &str) -> AdminResult<()> {
    if !orders.is_empty() && !orders.iter().any(|o| o.has_field(field)) {
        return Err(AdminError::MissingField(field.to_string()));
    }
    Ok(())
}
