// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Storefront REST Adapter
//!
//! reqwest-backed implementation of the [`ResourceClient`] port.
//!
//! # API Endpoints
//!
//! - `GET    /products`        - List products
//! - `POST   /products`        - Create product (multipart)
//! - `PUT    /products/{id}`   - Partial update (multipart)
//! - `DELETE /products/{id}`   - Delete product
//! - `GET    /orders`          - List orders
//! - `PUT    /orders/{id}`     - Update status (JSON `{status}`)
//! - `DELETE /orders/{id}`     - Delete order
//!
//! Only HTTP 200 counts as success. Any other status is returned as
//! [`ClientError::HttpStatus`] with the parsed error body.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::config::ApiConfig;
use crate::domain::error::{ClientError, ErrorBody};
use crate::domain::resource::{FormPayload, RequestBody, ResourceClient};

/// HTTP adapter bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    /// HTTP client (carries the configured timeout)
    client: Client,

    /// API base URL without trailing slash (e.g. "http://localhost:3001/api")
    base_url: String,
}

impl HttpResourceClient {
    /// Create an adapter from API settings.
    ///
    /// # Arguments
    /// * `config` - base URL and optional request timeout
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL for a resource path
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<Value, ClientError> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        request = match body {
            Some(RequestBody::Json(json)) => request.json(&json),
            Some(RequestBody::Multipart(form)) => request.multipart(build_form(form)?),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status != StatusCode::OK {
            let body = ErrorBody::from_bytes(&bytes);
            warn!(
                "{} {} failed with HTTP {}: {}",
                method,
                url,
                status.as_u16(),
                body.display_message()
            );
            return Err(ClientError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        decode_body(&bytes)
    }
}

/// Empty bodies decode to `Value::Null`; anything else must be JSON.
fn decode_body(bytes: &[u8]) -> Result<Value, ClientError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ClientError::network(format!("malformed response body: {e}")))
}

fn build_form(payload: FormPayload) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for (name, value) in payload.fields {
        form = form.text(name, value);
    }
    for (name, attachment) in payload.files {
        let part = Part::bytes(attachment.bytes.to_vec())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)
            .map_err(|e| {
                ClientError::InvalidRequest(format!(
                    "invalid content type '{}' for {}: {e}",
                    attachment.content_type, name
                ))
            })?;
        form = form.part(name, part);
    }
    Ok(form)
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.execute(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: RequestBody) -> Result<Value, ClientError> {
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: RequestBody) -> Result<Value, ClientError> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.execute(Method::DELETE, path, None).await
    }
}
