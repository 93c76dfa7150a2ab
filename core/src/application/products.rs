// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Product Resource Manager
//!
//! CRUD over `/products`. Create and update go out as multi-part forms so
//! the optional image slots can ride along with the text fields.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::listing::{decode_record, decode_records, Listing};
use crate::domain::error::{AdminError, AdminResult};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::resource::{RequestBody, ResourceClient};

const PRODUCTS_PATH: &str = "/products";

fn product_path(product_id: i64) -> String {
    format!("{PRODUCTS_PATH}/{product_id}")
}

fn ensure_product_id(product_id: i64) -> AdminResult<()> {
    if product_id <= 0 {
        return Err(AdminError::invalid_argument(format!(
            "product_id must be a positive integer (got {product_id})"
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ProductManager {
    client: Arc<dyn ResourceClient>,
}

impl ProductManager {
    pub fn new(client: Arc<dyn ResourceClient>) -> Self {
        Self { client }
    }

    /// Fetch all products. Never fails: errors come back inside the listing.
    pub async fn list(&self) -> Listing<Product> {
        let result = self.fetch_all().await;
        if let Err(e) = &result {
            warn!("Failed to list products: {}", e);
        }
        Listing::from_result(result)
    }

    async fn fetch_all(&self) -> AdminResult<Vec<Product>> {
        let value = self.client.get(PRODUCTS_PATH).await?;
        let products: Vec<Product> = decode_records(value, "product", Product::from_value)?;
        debug!("Fetched {} products", products.len());
        Ok(products)
    }

    pub async fn get(&self, product_id: i64) -> AdminResult<Product> {
        ensure_product_id(product_id)?;
        let value = self.client.get(&product_path(product_id)).await?;
        decode_record(value, "product")
    }

    /// Create a product. Returns the backend's response payload.
    pub async fn create(&self, product: &NewProduct) -> AdminResult<Value> {
        product.validate()?;
        let response = self
            .client
            .post(PRODUCTS_PATH, RequestBody::Multipart(product.to_form()))
            .await?;
        info!("Created product '{}'", product.name);
        Ok(response)
    }

    /// Partially update a product. Only supplied fields are sent.
    pub async fn update(&self, product_id: i64, update: &ProductUpdate) -> AdminResult<Value> {
        ensure_product_id(product_id)?;
        update.validate()?;

        let form = update.to_form();
        debug!(
            "Updating product {} with fields {:?}",
            product_id,
            form.fields.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>()
        );
        let response = self
            .client
            .put(&product_path(product_id), RequestBody::Multipart(form))
            .await?;
        info!("Updated product {}", product_id);
        Ok(response)
    }

    pub async fn delete(&self, product_id: i64) -> AdminResult<Value> {
        ensure_product_id(product_id)?;
        let response = self.client.delete(&product_path(product_id)).await?;
        info!("Deleted product {}", product_id);
        Ok(response)
    }
}

impl std::fmt::Debug for ProductManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductManager").finish_non_exhaustive()
    }
}
