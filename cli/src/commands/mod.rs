// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the storefront admin CLI

pub mod config;
pub mod dashboard;
pub mod order;
pub mod product;

pub use self::config::ConfigCommand;
pub use self::order::OrderCommand;
pub use self::product::ProductCommand;

use anyhow::{Context, Result};
use std::path::PathBuf;

use storefront_admin_core::{AdminConfig, AdminServices};

/// Load configuration, apply the `--api-url` override and wire the services.
pub fn connect(config_path: Option<PathBuf>, api_url: Option<String>) -> Result<AdminServices> {
    let config = resolve_config(config_path, api_url)?;
    AdminServices::connect(config).context("Failed to create API client")
}

pub fn resolve_config(config_path: Option<PathBuf>, api_url: Option<String>) -> Result<AdminConfig> {
    let mut config =
        AdminConfig::load_or_default(config_path).context("Failed to load configuration")?;

    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }

    config
        .validate()
        .context("Configuration validation failed")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn api_url_flag_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: \"http://file.example:3001/api\"").unwrap();

        let config = resolve_config(
            Some(file.path().to_path_buf()),
            Some("http://flag.example:3001/api".to_string()),
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://flag.example:3001/api");
    }

    #[test]
    fn invalid_url_is_rejected_before_connecting() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = connect(
            Some(file.path().to_path_buf()),
            Some("ftp://files.example".to_string()),
        );
        assert!(result.is_err());
    }
}
