// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Collection results that never throw.
//!
//! A failed fetch yields an empty collection plus the error for display, so
//! one failing listing does not stop the rest of a page from rendering.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::error::{AdminError, AdminResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub error: Option<AdminError>,
}

impl<T> Listing<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    pub fn failed(error: AdminError) -> Self {
        Self {
            items: Vec::new(),
            error: Some(error),
        }
    }

    pub fn from_result(result: AdminResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => Self::ok(items),
            Err(e) => Self::failed(e),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_result(self) -> AdminResult<Vec<T>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.items),
        }
    }
}

/// Decode a JSON array response record by record.
///
/// Each element goes through `from_record`, which cannot fail, so one damaged
/// record never hides the others. Only a non-array body is a
/// [`AdminError::Validation`].
pub(crate) fn decode_records<T>(
    value: Value,
    what: &str,
    from_record: impl Fn(Value) -> T,
) -> AdminResult<Vec<T>> {
    let Value::Array(records) = value else {
        return Err(AdminError::Validation(format!(
            "expected a JSON array of {what}, got {}",
            json_kind(&value)
        )));
    };

    Ok(records.into_iter().map(from_record).collect())
}

pub(crate) fn decode_record<T: DeserializeOwned>(value: Value, what: &str) -> AdminResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AdminError::Validation(format!("{what} record is invalid: {e}")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
