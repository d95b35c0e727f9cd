// ABOUTME: HTTP middleware for cross-origin access control
// ABOUTME: CORS policy is driven by the server configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! HTTP middleware

/// CORS configuration for the HTTP API
pub mod cors;

pub use cors::setup_cors;
