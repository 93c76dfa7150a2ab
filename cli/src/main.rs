// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! # Storefront Admin CLI
//!
//! The `storefront-admin` binary drives the storefront REST API from a
//! terminal.
//!
//! ## Commands
//!
//! - `storefront-admin dashboard` - Business insights and revenue by date
//! - `storefront-admin product list|show|create|update|delete` - Product catalogue
//! - `storefront-admin order list|show|status|delete` - Order fulfilment
//! - `storefront-admin config show|validate|generate` - Configuration management

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use storefront_admin::commands::{self, ConfigCommand, OrderCommand, ProductCommand};

/// Storefront Admin - manage products and orders, inspect sales
#[derive(Parser)]
#[command(name = "storefront-admin")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "STOREFRONT_ADMIN_CONFIG",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Backend API base URL (overrides the configuration file)
    #[arg(long, global = true, env = "STOREFRONT_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "STOREFRONT_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show business insights and revenue over time
    #[command(name = "dashboard")]
    Dashboard,

    /// Product management
    #[command(name = "product")]
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// Order management
    #[command(name = "order")]
    Order {
        #[command(subcommand)]
        command: OrderCommand,
    },

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    };

    match command {
        Commands::Config { command } => {
            commands::config::handle_command(command, cli.config).await
        }
        Commands::Dashboard => {
            let services = commands::connect(cli.config, cli.api_url)?;
            commands::dashboard::handle_command(&services).await
        }
        Commands::Product { command } => {
            let services = commands::connect(cli.config, cli.api_url)?;
            commands::product::handle_command(command, &services).await
        }
        Commands::Order { command } => {
            let services = commands::connect(cli.config, cli.api_url)?;
            commands::order::handle_command(command, &services).await
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
