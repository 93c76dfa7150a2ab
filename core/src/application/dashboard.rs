// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Dashboard Service
//!
//! Fetches products and orders and feeds them to the aggregator. Both
//! listings are needed; if either fetch fails the dashboard fails with that
//! error instead of reporting partial numbers.

use tracing::{debug, info};

use crate::application::analytics::{OrderAnalytics, OrderAnalyticsAggregator};
use crate::application::orders::OrderManager;
use crate::application::products::ProductManager;
use crate::domain::error::AdminResult;

#[derive(Debug, Clone)]
pub struct DashboardService {
    products: ProductManager,
    orders: OrderManager,
    aggregator: OrderAnalyticsAggregator,
}

impl DashboardService {
    pub fn new(
        products: ProductManager,
        orders: OrderManager,
        aggregator: OrderAnalyticsAggregator,
    ) -> Self {
        Self {
            products,
            orders,
            aggregator,
        }
    }

    pub async fn load(&self) -> AdminResult<OrderAnalytics> {
        let (products, orders) = tokio::join!(self.products.list(), self.orders.list());
        let products = products.into_result()?;
        let orders = orders.into_result()?;
        debug!(
            "Aggregating {} orders against {} products",
            orders.len(),
            products.len()
        );

        let analytics = self.aggregator.aggregate(&orders, products.len())?;
        info!(
            "Dashboard computed: {} valid of {} orders",
            analytics.valid_order_count, analytics.raw_order_count
        );
        Ok(analytics)
    }
}
