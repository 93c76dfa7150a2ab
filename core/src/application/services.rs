// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Wiring for the admin surface: one resource client shared by both
//! managers and the dashboard.

use std::sync::Arc;

use crate::application::analytics::OrderAnalyticsAggregator;
use crate::application::dashboard::DashboardService;
use crate::application::orders::OrderManager;
use crate::application::products::ProductManager;
use crate::domain::config::AdminConfig;
use crate::domain::error::AdminResult;
use crate::domain::resource::ResourceClient;
use crate::infrastructure::http_client::HttpResourceClient;

#[derive(Debug, Clone)]
pub struct AdminServices {
    config: AdminConfig,
    products: ProductManager,
    orders: OrderManager,
    dashboard: DashboardService,
}

impl AdminServices {
    /// Build the HTTP client from `config.api` and wire everything to it.
    pub fn connect(config: AdminConfig) -> AdminResult<Self> {
        let client = HttpResourceClient::new(&config.api)?;
        tracing::debug!("Resource client bound to {}", client.base_url());
        Ok(Self::with_client(config, Arc::new(client)))
    }

    pub fn with_client(config: AdminConfig, client: Arc<dyn ResourceClient>) -> Self {
        let products = ProductManager::new(client.clone());
        let orders = OrderManager::new(client);
        let dashboard = DashboardService::new(
            products.clone(),
            orders.clone(),
            OrderAnalyticsAggregator::new(config.analytics.clone()),
        );
        Self {
            config,
            products,
            orders,
            dashboard,
        }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub fn products(&self) -> &ProductManager {
        &self.products
    }

    pub fn orders(&self) -> &OrderManager {
        &self.orders
    }

    pub fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }
}
