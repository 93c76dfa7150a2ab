// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

mod common;

use mockito::{Server, ServerGuard};
use rust_decimal::Decimal;
use serde_json::json;

use common::{RecordingClient, Reply};
use storefront_admin_core::{
    AdminConfig, AdminError, AdminServices, ApiConfig, AverageBasis, InsightValue,
};

const ORDERS: &str = r#"[
    {"order_id": 1, "customer_id": 7, "total_price": "100.00", "order_date": "2024-01-01T10:00:00.000Z", "status": "Pending"},
    {"order_id": 2, "customer_id": 8, "total_price": "50.00", "order_date": "2024-01-01T16:45:00.000Z", "status": "Confirmed"},
    {"order_id": 3, "customer_id": 7, "total_price": "bad", "order_date": "2024-01-02T08:00:00.000Z", "status": "Packing"}
]"#;

const PRODUCTS: &str = r#"[
    {"product_id": 1, "product_name": "Mug", "price": "12.00", "stock_quantity": 4},
    {"product_id": 2, "product_name": "Pot", "price": "30.00", "stock_quantity": 0}
]"#;

fn config_for(server: &Server, basis: AverageBasis) -> AdminConfig {
    let mut config = AdminConfig {
        api: ApiConfig::new(format!("{}/api", server.url())),
        ..AdminConfig::default()
    };
    config.analytics.average_basis = basis;
    config
}

async fn backend() -> ServerGuard {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_body(PRODUCTS)
        .create_async()
        .await;
    server
        .mock("GET", "/api/orders")
        .with_status(200)
        .with_body(ORDERS)
        .create_async()
        .await;
    server
}

#[tokio::test]
async fn dashboard_over_http_with_raw_basis() {
    let server = backend().await;
    let services = AdminServices::connect(config_for(&server, AverageBasis::RawOrders)).unwrap();

    let analytics = services.dashboard().load().await.unwrap();

    let formatted: Vec<String> = analytics
        .insights
        .entries()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        formatted,
        vec![
            "Total Revenue: $150.00",
            "Average Order Value: $50.00",
            "Total Products: 2",
            "Total Orders: 3",
            "Total Customers: 2",
        ]
    );
    assert_eq!(analytics.revenue_by_date.len(), 1);
    assert_eq!(analytics.revenue_by_date[0].revenue, Decimal::new(15000, 2));
    assert_eq!(analytics.filtered_records, 1);
}

#[tokio::test]
async fn dashboard_with_valid_basis() {
    let server = backend().await;
    let services = AdminServices::connect(config_for(&server, AverageBasis::ValidOrders)).unwrap();

    let analytics = services.dashboard().load().await.unwrap();

    assert_eq!(
        analytics.insights.entries()[1].value,
        InsightValue::Money(Decimal::new(75, 0))
    );
}

#[tokio::test]
async fn failed_product_fetch_fails_the_dashboard() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/products")
        .with_status(503)
        .with_body(r#"{"error": "Service Unavailable"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/orders")
        .with_status(200)
        .with_body(ORDERS)
        .create_async()
        .await;

    let services = AdminServices::connect(config_for(&server, AverageBasis::RawOrders)).unwrap();
    let err = services.dashboard().load().await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn orders_without_prices_raise_missing_field() {
    let client = RecordingClient::scripted([
        Reply::Ok(json!([])),
        Reply::Ok(json!([{"order_id": 1, "customer_id": 2, "order_date": "2024-01-01"}])),
    ]);
    let services = AdminServices::with_client(AdminConfig::default(), client);

    let err = services.dashboard().load().await.unwrap_err();

    assert_eq!(err, AdminError::MissingField("total_price".to_string()));
}

#[tokio::test]
async fn empty_store_reports_zeros() {
    let client = RecordingClient::scripted([Reply::Ok(json!([])), Reply::Ok(json!([]))]);
    let services = AdminServices::with_client(AdminConfig::default(), client.clone());

    let analytics = services.dashboard().load().await.unwrap();

    assert_eq!(analytics.insights.total_revenue, Decimal::ZERO);
    assert_eq!(analytics.insights.total_orders, 0);
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn product_with_null_price_still_counts_toward_total_products() {
    let client = RecordingClient::scripted([
        Reply::Ok(json!([
            {"product_id": 1, "product_name": "Mug", "price": "12.00", "stock_quantity": 4},
            {"product_id": 2, "product_name": "Pot", "price": null, "stock_quantity": 1}
        ])),
        Reply::Ok(json!([
            {"order_id": 1, "customer_id": 7, "total_price": "20.00", "order_date": "2024-03-05"}
        ])),
    ]);
    let services = AdminServices::with_client(AdminConfig::default(), client);

    let analytics = services.dashboard().load().await.unwrap();

    assert_eq!(analytics.insights.total_products, 2);
    assert_eq!(analytics.insights.total_orders, 1);
    assert_eq!(analytics.insights.total_revenue, Decimal::new(2000, 2));
}
