// ABOUTME: Main library entry point for the MoodFood suggestion server
// ABOUTME: Provides mood-aware food pools, classification, and nutrition lookup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # MoodFood Server
//!
//! A mood-aware food suggestion service. Nine fixed moods each carry a large
//! pool of food names built deterministically from seed tables; lookups run
//! the other way too, classifying a food name back to a mood. Nutrition for
//! any food name is resolved through an ordered provider chain (Edamam, then
//! USDA `FoodData` Central) with an infallible heuristic estimator as the
//! final step, so a lookup always produces an answer.
//!
//! ## Features
//!
//! - **Deterministic pools**: seed expansion, dedup, and padding with no RNG
//! - **Mood classification**: exact reverse lookup plus ordered keyword rules
//! - **Provider fallback**: Edamam then USDA then heuristic, with diagnostics
//! - **Bounded caching**: LRU cache over resolved nutrition lookups
//! - **HTTP API**: axum routes over shared in-memory state
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use moodfood_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("MoodFood server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// Health-condition food guidance tables
pub mod conditions;

/// Configuration management
pub mod config;

/// Application constants and default values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Mood classification and heuristic nutrition estimation
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// `HTTP` middleware (CORS)
pub mod middleware;

/// Common data models for moods and nutrition
pub mod models;

/// Mood food pools: deterministic builder, store, and reverse index
pub mod pools;

/// Nutrition provider implementations (Edamam, USDA)
pub mod providers;

/// Ordered provider fallback with bounded caching
pub mod resolver;

/// `HTTP` routes for pools, suggestions, nutrition, and conditions
pub mod routes;

/// Random food suggestion picking over stored pools
pub mod suggestions;
