// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Error taxonomy for resource calls and analytics.
//!
//! Two levels:
//! - [`ClientError`] is what the Resource Client reports for a single HTTP
//!   round trip (transport failure or non-200 status).
//! - [`AdminError`] is what managers and the aggregator report to the
//!   presentation layer. Every variant is terminal for the one operation that
//!   raised it and carries a human-readable message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown when the backend rejects a request without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// JSON error body returned by the backend on non-200 responses.
///
/// The backend is inconsistent about the field it uses (`message` on most
/// routes, `error` on the product routes), so both are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }

    /// Parse a raw response body. Anything that is not a JSON object yields
    /// an empty body, which renders as [`UNKNOWN_ERROR`].
    pub fn from_bytes(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_default()
    }

    /// `message`, else `error`, else [`UNKNOWN_ERROR`].
    pub fn display_message(&self) -> &str {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .unwrap_or(UNKNOWN_ERROR)
    }
}

/// Outcome of a failed Resource Client call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No usable response: connection refused, timeout, or a body that is
    /// not valid JSON.
    #[error("Network error: {cause}")]
    Network { cause: String },

    /// A response arrived but its status was not 200.
    #[error("HTTP {code}: {}", .body.display_message())]
    HttpStatus { code: u16, body: ErrorBody },

    /// The request could not be built locally (e.g. a malformed MIME type).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    pub fn network(cause: impl Into<String>) -> Self {
        ClientError::Network {
            cause: cause.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::network(format!("request timed out: {err}"))
        } else if err.is_connect() {
            ClientError::network(format!("connection failed: {err}"))
        } else if err.is_builder() {
            ClientError::InvalidRequest(err.to_string())
        } else {
            ClientError::network(err.to_string())
        }
    }
}

/// Errors surfaced by the resource managers and the analytics aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message} (HTTP {code})")]
    HttpStatus { code: u16, message: String },

    /// A local coercion failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required field is absent from every record of a collection.
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AdminError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AdminError::InvalidArgument(msg.into())
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            AdminError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ClientError> for AdminError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network { cause } => AdminError::Network(cause),
            ClientError::HttpStatus { code, body } => AdminError::HttpStatus {
                code,
                message: body.display_message().to_string(),
            },
            ClientError::InvalidRequest(msg) => AdminError::InvalidArgument(msg),
        }
    }
}

pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_message_over_error() {
        let body = ErrorBody {
            message: Some("Order not found.".to_string()),
            error: Some("db exploded".to_string()),
        };
        assert_eq!(body.display_message(), "Order not found.");
    }

    #[test]
    fn error_body_falls_back_to_error_field() {
        let body = ErrorBody::from_bytes(br#"{"success": false, "error": "Failed to process product data"}"#);
        assert_eq!(body.display_message(), "Failed to process product data");
    }

    #[test]
    fn error_body_without_text_is_unknown() {
        assert_eq!(ErrorBody::from_bytes(b"{}").display_message(), UNKNOWN_ERROR);
        assert_eq!(ErrorBody::from_bytes(b"<html>502</html>").display_message(), UNKNOWN_ERROR);
        assert_eq!(ErrorBody::from_bytes(b"").display_message(), UNKNOWN_ERROR);
        assert_eq!(ErrorBody::with_message("  ").display_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn http_status_maps_to_admin_error_with_message() {
        let err = ClientError::HttpStatus {
            code: 404,
            body: ErrorBody::with_message("Product not found"),
        };
        let admin: AdminError = err.into();
        assert_eq!(
            admin,
            AdminError::HttpStatus {
                code: 404,
                message: "Product not found".to_string()
            }
        );
        assert_eq!(admin.to_string(), "Product not found (HTTP 404)");
    }

    #[test]
    fn network_maps_to_admin_network() {
        let admin: AdminError = ClientError::network("connection refused").into();
        assert!(matches!(admin, AdminError::Network(ref c) if c == "connection refused"));
        assert_eq!(admin.status_code(), None);
    }
}
