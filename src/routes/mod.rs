// ABOUTME: Route module organization for the MoodFood server HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with shared resources
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Route module
//!
//! Organizes all HTTP routes by domain. Each domain module contains route
//! definitions and thin handler functions that delegate to the pool store,
//! the nutrition resolver, or the static condition content.

/// Health condition guidance routes
pub mod conditions;
/// Health check and system status routes
pub mod health;
/// Mood pool and suggestion routes
pub mod moods;
/// Nutrition lookup routes
pub mod nutrition;

pub use conditions::ConditionRoutes;
pub use health::HealthRoutes;
pub use moods::MoodRoutes;
pub use nutrition::NutritionRoutes;

use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::pools::PoolStore;
use crate::resolver::NutritionResolver;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every route handler
pub struct ServerResources {
    /// Per-mood food pools
    pub store: Arc<dyn PoolStore>,
    /// Nutrition resolution chain
    pub resolver: Arc<NutritionResolver>,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the shared server state
    #[must_use]
    pub fn new(
        store: Arc<dyn PoolStore>,
        resolver: Arc<NutritionResolver>,
        config: ServerConfig,
    ) -> Self {
        Self {
            store,
            resolver,
            config,
        }
    }
}

/// Assemble the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    Router::new()
        .merge(MoodRoutes::routes(resources.clone()))
        .merge(NutritionRoutes::routes(resources))
        .merge(ConditionRoutes::routes())
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
