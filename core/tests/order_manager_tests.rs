// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

mod common;

use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

use common::{Call, RecordingClient, Reply};
use storefront_admin_core::{
    AdminError, ApiConfig, HttpResourceClient, Order, OrderManager, OrderStatus, RequestBody,
};

fn http_manager(server: &Server) -> OrderManager {
    let client = HttpResourceClient::new(&ApiConfig::new(format!("{}/api", server.url()))).unwrap();
    OrderManager::new(Arc::new(client))
}

#[tokio::test]
async fn list_keeps_records_that_fail_coercion() {
    let client = RecordingClient::scripted([Reply::Ok(json!([
        {"order_id": 1, "customer_id": 7, "total_price": "100.00", "order_date": "2024-01-01", "status": "Pending"},
        {"order_id": 2, "customer_id": 8, "total_price": "bad", "order_date": "2024-01-02", "status": "Packing"}
    ]))]);

    let listing = OrderManager::new(client).list().await;

    assert!(listing.is_ok());
    assert_eq!(listing.len(), 2);
    assert_eq!(listing.items[1].total_price(), None);
    assert_eq!(listing.items[1].status(), Some(OrderStatus::Packing));
}

#[tokio::test]
async fn list_keeps_non_object_elements_as_empty_records() {
    let client = RecordingClient::scripted([Reply::Ok(json!([
        {"order_id": 1, "customer_id": 7, "total_price": "100.00", "order_date": "2024-01-01"},
        null,
        "garbage"
    ]))]);

    let listing = OrderManager::new(client).list().await;

    assert!(listing.is_ok());
    assert_eq!(listing.len(), 3);
    assert_eq!(listing.items[0].order_id(), Some(1));
    assert_eq!(listing.items[1], Order::default());
    assert_eq!(listing.items[2], Order::default());
}

#[tokio::test]
async fn list_failure_yields_empty_listing_with_error() {
    let client = RecordingClient::scripted([Reply::Status(500, "Internal Server Error")]);
    let listing = OrderManager::new(client).list().await;

    assert!(listing.is_empty());
    assert_eq!(
        listing.error,
        Some(AdminError::HttpStatus {
            code: 500,
            message: "Internal Server Error".to_string()
        })
    );
}

#[tokio::test]
async fn update_status_puts_exact_label() {
    let client = RecordingClient::new();
    let manager = OrderManager::new(client.clone());

    manager
        .update_status(5, "Delivered (Waiting for DC to Call You)")
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![Call::Put(
            "/orders/5".to_string(),
            RequestBody::Json(json!({"status": "Delivered (Waiting for DC to Call You)"}))
        )]
    );
}

#[tokio::test]
async fn invalid_status_never_reaches_the_network() {
    let client = RecordingClient::new();
    let manager = OrderManager::new(client.clone());

    for label in ["Shipped", "pending", "PACKING", ""] {
        let err = manager.update_status(5, label).await.unwrap_err();
        assert!(matches!(err, AdminError::InvalidArgument(_)), "{label:?}");
    }
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn non_positive_ids_are_rejected() {
    let client = RecordingClient::new();
    let manager = OrderManager::new(client.clone());

    assert!(matches!(
        manager.update_status(0, "Pending").await,
        Err(AdminError::InvalidArgument(_))
    ));
    assert!(matches!(
        manager.set_status(-1, OrderStatus::Confirmed).await,
        Err(AdminError::InvalidArgument(_))
    ));
    assert!(matches!(manager.delete(0).await, Err(AdminError::InvalidArgument(_))));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn status_update_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/orders/42")
        .match_body(Matcher::Json(json!({"status": "Out for Delivery"})))
        .with_status(200)
        .with_body(r#"{"message": "Order status updated"}"#)
        .create_async()
        .await;

    http_manager(&server)
        .set_status(42, OrderStatus::OutForDelivery)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn deleting_missing_order_reports_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/orders/999")
        .with_status(404)
        .with_body(r#"{"message": "Order not found"}"#)
        .create_async()
        .await;

    let err = http_manager(&server).delete(999).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "Order not found (HTTP 404)");
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client = RecordingClient::scripted([Reply::Network("timed out")]);
    let err = OrderManager::new(client).delete(3).await.unwrap_err();
    assert_eq!(err, AdminError::Network("timed out".to_string()));
}
