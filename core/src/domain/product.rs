// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Product Domain
//!
//! Product records as listed by the backend, plus the two mutation requests:
//! [`NewProduct`] (full create) and [`ProductUpdate`] (partial update, where
//! only `Some` fields are sent).
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Product view-model and multi-part request construction

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::coercion::{
    deserialize_optional_decimal, deserialize_optional_integer, deserialize_optional_text,
};
use crate::domain::error::{AdminError, AdminResult};
use crate::domain::resource::{Attachment, FormPayload};

pub const FIELD_PRODUCT_NAME: &str = "product_name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_STOCK_QUANTITY: &str = "stock_quantity";

/// Multi-part field names for the three image slots.
pub const IMAGE_FIELDS: [&str; 3] = ["image1", "image2", "image3"];

/// A product as returned by `GET /products`.
///
/// Every column is optional and leniently coerced: a record with a `null`
/// price or an unexpected type still decodes, so one damaged row never hides
/// the rest of the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub product_id: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub product_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub price: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub stock_quantity: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub image1_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub image2_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub image3_url: Option<String>,
}

impl Product {
    /// Build from any JSON value. Non-object values become an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.product_name.as_deref().unwrap_or("")
    }

    pub fn image_urls(&self) -> Vec<&str> {
        [&self.image1_url, &self.image2_url, &self.image3_url]
            .into_iter()
            .filter_map(|u| u.as_deref())
            .collect()
    }
}

/// Up to three optional image attachments, one per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductImages {
    pub image1: Option<Attachment>,
    pub image2: Option<Attachment>,
    pub image3: Option<Attachment>,
}

impl ProductImages {
    pub fn is_empty(&self) -> bool {
        self.image1.is_none() && self.image2.is_none() && self.image3.is_none()
    }

    /// Set slot `index` (1-based).
    pub fn set(&mut self, index: usize, attachment: Attachment) -> AdminResult<()> {
        match index {
            1 => self.image1 = Some(attachment),
            2 => self.image2 = Some(attachment),
            3 => self.image3 = Some(attachment),
            _ => {
                return Err(AdminError::invalid_argument(format!(
                    "image slot must be 1, 2 or 3 (got {index})"
                )))
            }
        }
        Ok(())
    }

    /// Append the present images to `form`; absent slots are skipped.
    fn attach_to(&self, mut form: FormPayload) -> FormPayload {
        let slots = [&self.image1, &self.image2, &self.image3];
        for (name, slot) in IMAGE_FIELDS.iter().zip(slots) {
            if let Some(attachment) = slot {
                form = form.file(*name, attachment.clone());
            }
        }
        form
    }
}

/// Full create request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i64,
    pub images: ProductImages,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock_quantity,
            images: ProductImages::default(),
        }
    }

    pub fn with_images(mut self, images: ProductImages) -> Self {
        self.images = images;
        self
    }

    pub fn validate(&self) -> AdminResult<()> {
        validate_price(self.price)?;
        validate_stock(self.stock_quantity)
    }

    pub fn to_form(&self) -> FormPayload {
        let form = FormPayload::new()
            .text(FIELD_PRODUCT_NAME, self.name.as_str())
            .text(FIELD_DESCRIPTION, self.description.as_str())
            .text(FIELD_PRICE, self.price.to_string())
            .text(FIELD_STOCK_QUANTITY, self.stock_quantity.to_string());
        self.images.attach_to(form)
    }
}

/// Partial update request.
///
/// `None` means "leave unchanged". `Some(0)` for price or stock is a real
/// value and is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i64>,
    pub images: ProductImages,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i64) -> Self {
        self.stock_quantity = Some(stock_quantity);
        self
    }

    pub fn images(mut self, images: ProductImages) -> Self {
        self.images = images;
        self
    }

    /// True when no field and no image was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
            && self.images.is_empty()
    }

    pub fn validate(&self) -> AdminResult<()> {
        if self.is_empty() {
            return Err(AdminError::invalid_argument(
                "product update must supply at least one field",
            ));
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock_quantity {
            validate_stock(stock)?;
        }
        Ok(())
    }

    /// Only supplied fields end up in the form.
    pub fn to_form(&self) -> FormPayload {
        let mut form = FormPayload::new();
        if let Some(name) = &self.name {
            form = form.text(FIELD_PRODUCT_NAME, name.as_str());
        }
        if let Some(description) = &self.description {
            form = form.text(FIELD_DESCRIPTION, description.as_str());
        }
        if let Some(price) = self.price {
            form = form.text(FIELD_PRICE, price.to_string());
        }
        if let Some(stock) = self.stock_quantity {
            form = form.text(FIELD_STOCK_QUANTITY, stock.to_string());
        }
        self.images.attach_to(form)
    }
}

fn validate_price(price: Decimal) -> AdminResult<()> {
    if price < Decimal::ZERO {
        return Err(AdminError::invalid_argument(format!(
            "price must be non-negative (got {price})"
        )));
    }
    Ok(())
}

fn validate_stock(stock_quantity: i64) -> AdminResult<()> {
    if stock_quantity < 0 {
        return Err(AdminError::invalid_argument(format!(
            "stock_quantity must be non-negative (got {stock_quantity})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn jpeg(name: &str) -> Attachment {
        Attachment::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    #[test]
    fn product_deserializes_string_decimal_columns() {
        let product: Product = serde_json::from_value(json!({
            "product_id": 12,
            "product_name": "Clay Pot",
            "description": null,
            "price": "10.50",
            "stock_quantity": 5,
            "image1_url": "1700000000-pot.jpg",
            "image2_url": null
        }))
        .unwrap();

        assert_eq!(product.product_id, Some(12));
        assert_eq!(product.name(), "Clay Pot");
        assert_eq!(product.price, Some(Decimal::from_str("10.50").unwrap()));
        assert_eq!(product.description, None);
        assert_eq!(product.image_urls(), vec!["1700000000-pot.jpg"]);
    }

    #[test]
    fn damaged_columns_decode_as_absent() {
        let product = Product::from_value(json!({
            "product_id": "7",
            "product_name": 42,
            "price": null,
            "stock_quantity": "lots"
        }));

        assert_eq!(product.product_id, Some(7));
        assert_eq!(product.name(), "42");
        assert_eq!(product.price, None);
        assert_eq!(product.stock_quantity, None);
    }

    #[test]
    fn non_object_record_is_empty_product() {
        assert_eq!(Product::from_value(Value::Null), Product::default());
        assert_eq!(Product::from_value(json!("oops")).name(), "");
    }

    #[test]
    fn new_product_form_includes_present_images_only() {
        let mut images = ProductImages::default();
        images.set(1, jpeg("image1.jpg")).unwrap();
        images.set(3, jpeg("image3.jpg")).unwrap();

        let form = NewProduct::new("Mug", "Blue mug", Decimal::new(1299, 2), 4)
            .with_images(images)
            .to_form();

        assert_eq!(form.field(FIELD_PRODUCT_NAME), Some("Mug"));
        assert_eq!(form.field(FIELD_PRICE), Some("12.99"));
        assert_eq!(form.field(FIELD_STOCK_QUANTITY), Some("4"));
        assert!(form.has_file("image1"));
        assert!(!form.has_file("image2"));
        assert!(form.has_file("image3"));
    }

    #[test]
    fn new_product_rejects_negative_values() {
        let negative_price = NewProduct::new("a", "b", Decimal::new(-1, 2), 1);
        assert!(matches!(negative_price.validate(), Err(AdminError::InvalidArgument(_))));

        let negative_stock = NewProduct::new("a", "b", Decimal::ZERO, -3);
        assert!(matches!(negative_stock.validate(), Err(AdminError::InvalidArgument(_))));

        assert!(NewProduct::new("a", "b", Decimal::ZERO, 0).validate().is_ok());
    }

    #[test]
    fn update_sends_zero_but_not_absent_fields() {
        let form = ProductUpdate::new().stock_quantity(0).to_form();

        assert_eq!(form.field(FIELD_STOCK_QUANTITY), Some("0"));
        assert_eq!(form.field(FIELD_PRICE), None);
        assert_eq!(form.field(FIELD_PRODUCT_NAME), None);
        assert_eq!(form.fields.len(), 1);
        assert!(form.files.is_empty());
    }

    #[test]
    fn update_with_zero_price_is_valid() {
        let update = ProductUpdate::new().price(Decimal::ZERO);
        assert!(update.validate().is_ok());
        assert_eq!(update.to_form().field(FIELD_PRICE), Some("0"));
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(matches!(
            ProductUpdate::new().validate(),
            Err(AdminError::InvalidArgument(_))
        ));
    }

    #[test]
    fn image_slot_out_of_range() {
        let mut images = ProductImages::default();
        assert!(images.set(4, jpeg("x.jpg")).is_err());
        assert!(images.set(0, jpeg("x.jpg")).is_err());
        assert!(images.is_empty());
    }
}
