// Copyright (c) 2026 Storefront Admin Contributors
// SPDX-License-Identifier: AGPL-3.0

// Admin Configuration Types
//
// Defines the configuration handed to the Resource Client and the managers
// at construction time:
// - API base URL and request timeout
// - Analytics options (average-order-value basis, currency symbol)
//
// Nothing here is process-global; every consumer receives its own copy.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::insight::AverageBasis;

pub const CONFIG_PATH_ENV: &str = "STOREFRONT_ADMIN_CONFIG";
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
pub const API_TIMEOUT_ENV: &str = "STOREFRONT_API_TIMEOUT_SECS";

/// Top-level configuration file (`storefront-admin.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Backend REST API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard aggregation settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to (e.g. `http://localhost:3001/api`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds; 0 disables the timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Divisor for the average order value
    #[serde(default)]
    pub average_basis: AverageBasis,

    /// Prefix for rendered money values
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            average_basis: AverageBasis::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl AdminConfig {
    /// Load configuration from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Discover configuration file using precedence order
    /// 1. STOREFRONT_ADMIN_CONFIG environment variable
    /// 2. ./storefront-admin.yaml (working directory)
    /// 3. ~/.storefront-admin/config.yaml (user home)
    /// 4. /etc/storefront-admin/config.yaml (Unix) or C:\ProgramData\StorefrontAdmin\config.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let cwd = PathBuf::from("./storefront-admin.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".storefront-admin").join("config.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        #[cfg(unix)]
        let system_config = PathBuf::from("/etc/storefront-admin/config.yaml");
        #[cfg(windows)]
        let system_config = PathBuf::from("C:\\ProgramData\\StorefrontAdmin\\config.yaml");

        if system_config.exists() {
            return Some(system_config);
        }

        None
    }

    /// Explicit path (must load) → discovered file → defaults; env overrides last.
    pub fn load_or_default(cli_path: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = cli_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load config at {:?}: {}", path, e)
            })?;
            config.apply_env_overrides();
            return Ok(config);
        }

        let mut config = if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            Self::from_yaml_file(config_path)?
        } else {
            tracing::debug!("No configuration file found in standard locations. Using defaults.");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Overriding api.base_url from {}", API_URL_ENV);
            self.api.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => tracing::warn!(
                    "Ignoring invalid {} value '{}': expected whole seconds",
                    API_TIMEOUT_ENV,
                    raw
                ),
            }
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            anyhow::bail!("api.base_url cannot be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!(
                "api.base_url must start with http:// or https:// (got '{}')",
                url
            );
        }
        if self.analytics.currency_symbol.chars().any(char::is_control) {
            anyhow::bail!("analytics.currency_symbol contains control characters");
        }
        Ok(())
    }
}
