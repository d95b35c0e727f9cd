// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads server, provider, and cache settings from environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management
//!
//! All runtime configuration comes from environment variables, loaded once at
//! startup. Provider credentials are optional; a provider without credentials
//! stays in the chain and reports itself unconfigured, which the resolver
//! surfaces in diagnostics rather than treating as a startup error.

use crate::constants::{env_config, nutrition, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Edamam nutrition-data API credentials and endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdamamApiConfig {
    /// Application id, absent when Edamam is not configured
    pub app_id: Option<String>,
    /// Application key, absent when Edamam is not configured
    pub app_key: Option<String>,
    /// Endpoint base URL
    pub base_url: String,
}

impl EdamamApiConfig {
    /// Whether both credentials are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.app_id.is_some() && self.app_key.is_some()
    }
}

/// USDA `FoodData` Central API credentials and endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdaApiConfig {
    /// API key, absent when USDA is not configured
    pub api_key: Option<String>,
    /// Endpoint base URL
    pub base_url: String,
}

impl UsdaApiConfig {
    /// Whether the key is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Log verbosity
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Edamam provider settings
    pub edamam: EdamamApiConfig,
    /// USDA provider settings
    pub usda: UsdaApiConfig,
    /// Resolver LRU cache capacity
    pub cache_capacity: usize,
    /// Comma-separated CORS origin allowlist, or "*" for any
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file when present, then reads each setting with its
    /// default.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse (for example a
    /// non-numeric `CACHE_CAPACITY`).
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            host: env_config::host(),
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            ),
            edamam: EdamamApiConfig {
                app_id: env::var("EDAMAM_APP_ID").ok(),
                app_key: env::var("EDAMAM_APP_KEY").ok(),
                base_url: env_var_or("EDAMAM_BASE_URL", nutrition::EDAMAM_BASE_URL),
            },
            usda: UsdaApiConfig {
                api_key: env::var("USDA_API_KEY").ok(),
                base_url: env_var_or("USDA_BASE_URL", nutrition::USDA_BASE_URL),
            },
            cache_capacity: env_var_or(
                "CACHE_CAPACITY",
                &nutrition::DEFAULT_CACHE_CAPACITY.to_string(),
            )
            .parse()
            .context("Invalid CACHE_CAPACITY value")?,
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
        };

        Ok(config)
    }

    /// Configuration for tests: loopback host, no providers, tiny cache
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".into(),
            http_port: ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::Debug,
            environment: Environment::Testing,
            edamam: EdamamApiConfig {
                app_id: None,
                app_key: None,
                base_url: nutrition::EDAMAM_BASE_URL.into(),
            },
            usda: UsdaApiConfig {
                api_key: None,
                base_url: nutrition::USDA_BASE_URL.into(),
            },
            cache_capacity: 16,
            cors_allowed_origins: "*".into(),
        }
    }

    /// One-line summary for startup logging, without credentials
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "host={} port={} env={} edamam_configured={} usda_configured={} cache={}",
            self.host,
            self.http_port,
            self.environment,
            self.edamam.is_configured(),
            self.usda.is_configured(),
            self.cache_capacity
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_with_info_fallback() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn environment_parses_aliases() {
        assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default(""), Environment::Development);
    }

    #[test]
    fn provider_configs_report_configuration_state() {
        let config = ServerConfig::for_testing();
        assert!(!config.edamam.is_configured());
        assert!(!config.usda.is_configured());

        let edamam = EdamamApiConfig {
            app_id: Some("id".into()),
            app_key: Some("key".into()),
            base_url: nutrition::EDAMAM_BASE_URL.into(),
        };
        assert!(edamam.is_configured());
    }

    #[test]
    fn summary_never_leaks_credentials() {
        let mut config = ServerConfig::for_testing();
        config.usda.api_key = Some("super-secret".into());
        assert!(!config.summary().contains("super-secret"));
    }
}
