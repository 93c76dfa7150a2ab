// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Domain
//!
//! Entities, value objects and the Resource Client port.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Storefront records, error taxonomy, configuration

pub mod coercion;
pub mod config;
pub mod error;
pub mod insight;
pub mod order;
pub mod product;
pub mod resource;
