// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Lenient conversion of raw JSON values.
//!
//! The backend serialises DECIMAL columns as strings and sometimes sends
//! integers as strings too. Anything that cannot be read as a number comes
//! back as `None` rather than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Numeric coercion: JSON numbers and numeric strings succeed; `null`,
/// booleans, empty or non-numeric strings yield `None`.
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                // Round-trip through the textual form to avoid binary float noise.
                Decimal::from_str(&n.to_string())
                    .ok()
                    .or_else(|| n.as_f64().and_then(Decimal::from_f64))
            }
        }
        Value::String(s) => parse_decimal_str(s),
        _ => None,
    }
}

fn parse_decimal_str(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Integer coercion with the same leniency as [`coerce_decimal`]; values with
/// a fractional part are rejected.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Read a calendar date from a date, datetime or RFC 3339 timestamp string.
///
/// Timestamps with an offset are bucketed by their UTC date.
pub fn parse_calendar_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc().date());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// serde adapter: numeric columns that may arrive as strings. Anything that
/// does not coerce (including `null`) becomes `None` instead of failing the
/// record.
pub fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

pub fn deserialize_optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_integer(&value))
}

/// Strings pass through, numbers and booleans are rendered, everything else
/// is `None`.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
