// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Storefront Admin Core
//!
//! Remote resource management and order analytics for the storefront admin
//! surface.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Typed CRUD over the storefront REST API and dashboard
//!   aggregation
//!
//! ```ignore
//! use storefront_admin_core::{AdminConfig, AdminServices};
//!
//! let services = AdminServices::connect(AdminConfig::default())?;
//! let listing = services.products().list().await;
//! let report = services.dashboard().load().await?;
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    AdminServices, DashboardService, Listing, OrderAnalytics, OrderAnalyticsAggregator,
    OrderManager, ProductManager,
};
pub use domain::config::{AdminConfig, AnalyticsConfig, ApiConfig};
pub use domain::error::{AdminError, AdminResult, ClientError, ErrorBody, UNKNOWN_ERROR};
pub use domain::insight::{AverageBasis, BusinessInsights, Insight, InsightValue, RevenuePoint};
pub use domain::order::{Order, OrderStatus};
pub use domain::product::{NewProduct, Product, ProductImages, ProductUpdate};
pub use domain::resource::{Attachment, FormPayload, RequestBody, ResourceClient};
pub use infrastructure::http_client::HttpResourceClient;
