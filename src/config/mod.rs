// ABOUTME: Configuration module: environment-driven server and provider settings
// ABOUTME: Everything loads once at startup from env vars with sane defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration module
//!
//! Centralized configuration for the server, loaded from environment
//! variables (with `.env` support) at startup:
//!
//! - **Server**: bind host, port, environment, log level
//! - **Providers**: Edamam and USDA credentials and base URLs
//! - **Cache**: resolver LRU capacity

/// Server configuration loaded from environment variables
pub mod environment;

pub use environment::{
    EdamamApiConfig, Environment, LogLevel, ServerConfig, UsdaApiConfig,
};
