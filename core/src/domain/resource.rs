// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Resource Client Port
//!
//! Typed CRUD contract between the resource managers and the remote REST
//! backend. The reqwest adapter lives in `infrastructure::http_client`; tests
//! substitute in-memory implementations.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Anti-corruption boundary for the storefront REST API
//!
//! Success is defined as HTTP status 200 exactly, for every method. No
//! operation retries or caches.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::domain::error::ClientError;

/// A binary payload with its declared file name and MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Multi-part form: text fields plus optional file parts, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, Attachment)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, attachment: Attachment) -> Self {
        self.files.push((name.into(), attachment));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.iter().any(|(k, _)| k == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.files.is_empty()
    }
}

/// Outgoing request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(FormPayload),
}

impl From<FormPayload> for RequestBody {
    fn from(form: FormPayload) -> Self {
        RequestBody::Multipart(form)
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

/// CRUD operations against `base_url + path`.
///
/// Paths are relative to the configured API base (e.g. `/products/12`).
/// Implementations return the decoded JSON body on 200 (`Value::Null` for an
/// empty body) and [`ClientError`] otherwise.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, ClientError>;

    async fn post(&self, path: &str, body: RequestBody) -> Result<Value, ClientError>;

    async fn put(&self, path: &str, body: RequestBody) -> Result<Value, ClientError>;

    async fn delete(&self, path: &str) -> Result<Value, ClientError>;
}
