// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

pub mod analytics;
pub mod dashboard;
pub mod listing;
pub mod orders;
pub mod products;
pub mod services;

pub use analytics::{OrderAnalytics, OrderAnalyticsAggregator};
pub use dashboard::DashboardService;
pub use listing::Listing;
pub use orders::OrderManager;
pub use products::ProductManager;
pub use services::AdminServices;
