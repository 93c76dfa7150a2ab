// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Product management commands
//!
//! Commands: list, show, create, update, delete

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use storefront_admin_core::domain::insight::format_money;
use storefront_admin_core::{
    AdminServices, Attachment, NewProduct, Product, ProductImages, ProductUpdate,
};

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List all products
    List,

    /// Show one product
    Show {
        #[arg(value_name = "PRODUCT_ID")]
        product_id: i64,
    },

    /// Create a product
    Create {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long, default_value = "")]
        description: String,

        /// Unit price (e.g. 12.99)
        #[arg(long)]
        price: Decimal,

        /// Units in stock
        #[arg(long, allow_negative_numbers = true)]
        stock: i64,

        #[command(flatten)]
        images: ImageArgs,
    },

    /// Update selected fields of a product
    Update {
        #[arg(value_name = "PRODUCT_ID")]
        product_id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<Decimal>,

        #[arg(long, allow_negative_numbers = true)]
        stock: Option<i64>,

        #[command(flatten)]
        images: ImageArgs,
    },

    /// Delete a product
    Delete {
        #[arg(value_name = "PRODUCT_ID")]
        product_id: i64,
    },
}

/// Up to three image files (jpg, jpeg or png).
#[derive(Args, Debug, Default)]
pub struct ImageArgs {
    #[arg(long, value_name = "PATH")]
    pub image1: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    pub image2: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    pub image3: Option<PathBuf>,
}

pub async fn handle_command(command: ProductCommand, services: &AdminServices) -> Result<()> {
    match command {
        ProductCommand::List => list(services).await,
        ProductCommand::Show { product_id } => show(services, product_id).await,
        ProductCommand::Create {
            name,
            description,
            price,
            stock,
            images,
        } => {
            let images = load_images(&images).await?;
            let product = NewProduct::new(name, description, price, stock).with_images(images);
            create(services, product).await
        }
        ProductCommand::Update {
            product_id,
            name,
            description,
            price,
            stock,
            images,
        } => {
            let update = ProductUpdate {
                name,
                description,
                price,
                stock_quantity: stock,
                images: load_images(&images).await?,
            };
            update_product(services, product_id, update).await
        }
        ProductCommand::Delete { product_id } => delete(services, product_id).await,
    }
}

async fn list(services: &AdminServices) -> Result<()> {
    let listing = services.products().list().await;
    if let Some(e) = &listing.error {
        bail!("Failed to fetch products: {}", e);
    }

    if listing.is_empty() {
        println!("{}", "No products found".yellow());
        return Ok(());
    }

    let symbol = &services.config().analytics.currency_symbol;
    println!("{} products found:", listing.len());
    println!("{:<8} {:<30} {:>12} {:>8}", "ID", "NAME", "PRICE", "STOCK");
    for product in &listing.items {
        println!(
            "{:<8} {:<30} {:>12} {:>8}",
            display_or_dash(product.product_id),
            product.name().bold(),
            price_text(product, symbol),
            display_or_dash(product.stock_quantity)
        );
    }

    Ok(())
}

async fn show(services: &AdminServices, product_id: i64) -> Result<()> {
    let product = services
        .products()
        .get(product_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch product {}: {}", product_id, e))?;

    print_product(&product, &services.config().analytics.currency_symbol);
    Ok(())
}

fn print_product(product: &Product, symbol: &str) {
    println!("{}", product.name().bold());
    println!("  ID: {}", display_or_dash(product.product_id));
    println!("  Price: {}", price_text(product, symbol));
    println!("  Stock: {}", display_or_dash(product.stock_quantity));
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  Description: {}", description);
    }
    let images = product.image_urls();
    if !images.is_empty() {
        println!("  Images:");
        for url in images {
            println!("    - {}", url);
        }
    }
}

fn price_text(product: &Product, symbol: &str) -> String {
    product
        .price
        .map(|p| format_money(p, symbol))
        .unwrap_or_else(|| "-".to_string())
}

fn display_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

async fn create(services: &AdminServices, product: NewProduct) -> Result<()> {
    services
        .products()
        .create(&product)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create product: {}", e))?;

    println!(
        "{}",
        format!("✓ Product '{}' created", product.name).green()
    );
    Ok(())
}

async fn update_product(
    services: &AdminServices,
    product_id: i64,
    update: ProductUpdate,
) -> Result<()> {
    services
        .products()
        .update(product_id, &update)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update product {}: {}", product_id, e))?;

    println!("{}", format!("✓ Product {} updated", product_id).green());
    Ok(())
}

async fn delete(services: &AdminServices, product_id: i64) -> Result<()> {
    services
        .products()
        .delete(product_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete product {}: {}", product_id, e))?;

    println!("{}", format!("✓ Product {} deleted", product_id).green());
    Ok(())
}

async fn load_images(args: &ImageArgs) -> Result<ProductImages> {
    let mut images = ProductImages::default();
    let slots = [&args.image1, &args.image2, &args.image3];
    for (index, path) in slots.into_iter().enumerate() {
        if let Some(path) = path {
            let slot = index + 1;
            images.set(slot, load_image(slot, path).await?)?;
        }
    }
    Ok(images)
}

/// Read an image file into an attachment named `image{slot}.{ext}`.
pub async fn load_image(slot: usize, path: &Path) -> Result<Attachment> {
    let (extension, content_type) = image_content_type(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {:?}", path))?;

    Ok(Attachment::new(
        format!("image{slot}.{extension}"),
        content_type,
        bytes,
    ))
}

/// Accepted image types, keyed by lower-cased file extension.
pub fn image_content_type(path: &Path) -> Result<(String, &'static str)> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let content_type = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => bail!(
            "Unsupported image type for {:?}: expected .jpg, .jpeg or .png",
            path
        ),
    };
    Ok((extension, content_type))
}
