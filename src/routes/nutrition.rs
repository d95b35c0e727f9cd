// ABOUTME: Route handler for nutrition lookup through the resolver chain
// ABOUTME: Blank food names are 400s; the response carries the diagnostic trail
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition routes
//!
//! One endpoint: resolve nutrition for a food name via the provider chain
//! with heuristic fallback. The response names the source that produced the
//! record and, when earlier attempts failed, a diagnostic listing each
//! failure reason.

use super::ServerResources;
use crate::errors::AppError;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for nutrition lookup
#[derive(Debug, Deserialize)]
pub struct NutritionQuery {
    /// Food name to resolve
    pub food: Option<String>,
}

/// Response carrying resolved nutrition
#[derive(Debug, Serialize, Deserialize)]
pub struct NutritionResponse {
    /// The food name as resolved (trimmed)
    pub food: String,
    /// Mood inferred for the food, when classification succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Energy in kilocalories
    pub calories: u32,
    /// Protein in grams
    pub protein_g: f64,
    /// Vitamin labels, comma-joined
    pub vitamins: String,
    /// Which lookup step produced the record
    pub source: String,
    /// Failure reasons from earlier attempts, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the nutrition lookup route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition", get(Self::handle_lookup))
            .with_state(resources)
    }

    async fn handle_lookup(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<NutritionQuery>,
    ) -> Result<Json<NutritionResponse>, AppError> {
        let food = query.food.unwrap_or_default();
        let resolution = resources.resolver.resolve(&food).await?;
        Ok(Json(NutritionResponse {
            food: food.trim().to_owned(),
            mood: resolution.mood.map(|m| m.as_str().to_owned()),
            calories: resolution.record.calories,
            protein_g: resolution.record.protein_g,
            vitamins: resolution.record.vitamins,
            source: resolution.record.source.as_str().to_owned(),
            diagnostic: resolution.diagnostic,
        }))
    }
}
