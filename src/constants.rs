// ABOUTME: System-wide constants and configuration defaults for the MoodFood server
// ABOUTME: Contains service identity, pool sizing, provider endpoints, and env helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

/// Service identity constants
pub mod service_names {
    /// Canonical service name for structured logging
    pub const MOODFOOD_SERVER: &str = "moodfood-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Network defaults
pub mod ports {
    /// Default `HTTP` port when `HTTP_PORT` is not set
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Pool sizing rules
pub mod pool_limits {
    /// Every default pool is padded up to at least this many items
    pub const MIN_POOL_SIZE: usize = 70;

    /// Every default pool is capped to this many items after padding
    pub const DEFAULT_POOL_CAP: usize = 100;

    /// Absolute ceiling applied while padding an under-filled pool
    pub const PAD_POOL_CAP: usize = 120;
}

/// Suggestion picker bounds
pub mod suggestion_limits {
    /// Smallest allowed suggestion count
    pub const MIN_SUGGESTIONS: usize = 1;

    /// Largest allowed suggestion count
    pub const MAX_SUGGESTIONS: usize = 10;

    /// Suggestion count used when the caller does not specify one
    pub const DEFAULT_SUGGESTIONS: usize = 5;
}

/// Nutrition provider endpoints and timeouts
pub mod nutrition {
    /// Edamam nutrition-data endpoint
    pub const EDAMAM_BASE_URL: &str = "https://api.edamam.com/api/nutrition-data";

    /// Edamam request timeout in seconds
    pub const EDAMAM_TIMEOUT_SECS: u64 = 8;

    /// USDA `FoodData` Central base URL
    pub const USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

    /// USDA request timeout in seconds
    pub const USDA_TIMEOUT_SECS: u64 = 10;

    /// Default capacity of the resolver's LRU cache
    pub const DEFAULT_CACHE_CAPACITY: usize = 256;

    /// Separator between accumulated provider failure reasons
    pub const DIAGNOSTIC_SEPARATOR: &str = " | ";
}

/// Environment-based configuration helpers
pub mod env_config {
    use super::ports;
    use std::env;

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .unwrap_or_else(|_| ports::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into())
    }
}
