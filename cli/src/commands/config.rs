// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show, validate, generate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::{Path, PathBuf};

use storefront_admin_core::domain::config::{API_TIMEOUT_ENV, API_URL_ENV, CONFIG_PATH_ENV};
use storefront_admin_core::{AdminConfig, AverageBasis};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,

        /// Print the effective configuration as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate sample configuration
    Generate {
        /// Output path (default: ./storefront-admin.yaml)
        #[arg(short, long, default_value = "./storefront-admin.yaml")]
        output: PathBuf,

        /// Include examples and comments
        #[arg(long)]
        examples: bool,
    },
}

pub async fn handle_command(
    command: ConfigCommand,
    config_override: Option<PathBuf>,
) -> Result<()> {
    match command {
        ConfigCommand::Show { paths, yaml } => show(config_override, paths, yaml).await,
        ConfigCommand::Validate { file } => validate(file.or(config_override)).await,
        ConfigCommand::Generate { output, examples } => generate(&output, examples).await,
    }
}

async fn show(config_override: Option<PathBuf>, show_paths: bool, as_yaml: bool) -> Result<()> {
    let config = AdminConfig::load_or_default(config_override.clone())
        .context("Failed to load configuration")?;

    if as_yaml {
        print!("{}", config.to_yaml_string()?);
        return Ok(());
    }

    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        if let Some(path) = &config_override {
            println!("  1. --config flag: {}", path.display());
        } else {
            println!("  1. --config flag: {}", "(not set)".dimmed());
        }
        println!(
            "  2. {}: {}",
            CONFIG_PATH_ENV,
            std::env::var(CONFIG_PATH_ENV)
                .unwrap_or_else(|_| "(not set)".to_string())
                .dimmed()
        );
        println!("  3. ./storefront-admin.yaml");
        println!("  4. ~/.storefront-admin/config.yaml");
        println!("  5. /etc/storefront-admin/config.yaml");
        println!();
    }

    println!("{}", "Current configuration:".bold());
    println!();

    println!("{}", "API:".bold());
    println!("  Base URL: {}", config.api.base_url);
    match config.api.timeout() {
        Some(timeout) => println!("  Timeout: {}s", timeout.as_secs()),
        None => println!("  Timeout: {}", "(disabled)".dimmed()),
    }
    for env in [API_URL_ENV, API_TIMEOUT_ENV] {
        if std::env::var(env).is_ok() {
            println!("  {}", format!("(overridden by {})", env).dimmed());
        }
    }
    println!();

    println!("{}", "Analytics:".bold());
    let basis = match config.analytics.average_basis {
        AverageBasis::RawOrders => "raw_orders (revenue / all order records)",
        AverageBasis::ValidOrders => "valid_orders (revenue / aggregated orders)",
    };
    println!("  Average order value basis: {}", basis);
    println!("  Currency symbol: {}", config.analytics.currency_symbol);
    println!();

    Ok(())
}

async fn validate(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let config = AdminConfig::load_or_default(config_path)
        .context("Failed to load configuration")?;

    config
        .validate()
        .context("Configuration validation failed")?;

    println!("{}", "✓ Configuration is valid".green());

    Ok(())
}

async fn generate(output: &Path, with_examples: bool) -> Result<()> {
    let sample = sample_config(with_examples);

    tokio::fs::write(output, sample)
        .await
        .with_context(|| format!("Failed to write config to {:?}", output))?;

    println!(
        "{}",
        format!("✓ Configuration generated: {}", output.display()).green()
    );

    Ok(())
}

fn sample_config(with_examples: bool) -> &'static str {
    if with_examples {
        include_str!("../../templates/config-with-examples.yaml")
    } else {
        include_str!("../../templates/config-minimal.yaml")
    }
}
