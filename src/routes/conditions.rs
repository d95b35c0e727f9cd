// ABOUTME: Route handlers for health condition dietary guidance
// ABOUTME: Static content; unknown condition path segments are 404s
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Health condition routes

use crate::conditions::{advice, HealthCondition};
use crate::errors::AppError;
use axum::{extract::Path, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Response listing every condition with guidance available
#[derive(Debug, Serialize, Deserialize)]
pub struct ConditionsResponse {
    /// Condition labels in declaration order
    pub conditions: Vec<String>,
}

/// Response carrying one condition's dietary guidance
#[derive(Debug, Serialize, Deserialize)]
pub struct ConditionResponse {
    /// Condition label
    pub condition: String,
    /// Foods to favor
    pub good: Vec<String>,
    /// Foods to avoid
    pub avoid: Vec<String>,
    /// Lifestyle and eating tips
    pub tips: String,
    /// Suggested dishes, comma-joined
    pub dishes: String,
}

/// Health condition routes implementation
pub struct ConditionRoutes;

impl ConditionRoutes {
    /// Create all condition guidance routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/conditions", get(Self::handle_list))
            .route("/api/conditions/:condition", get(Self::handle_get))
    }

    async fn handle_list() -> Json<ConditionsResponse> {
        Json(ConditionsResponse {
            conditions: HealthCondition::ALL
                .iter()
                .map(|c| c.as_str().to_owned())
                .collect(),
        })
    }

    async fn handle_get(
        Path(condition): Path<String>,
    ) -> Result<Json<ConditionResponse>, AppError> {
        let parsed: HealthCondition = condition
            .parse()
            .map_err(|_| AppError::not_found(format!("Condition '{condition}'")))?;
        let advice = advice(parsed);
        Ok(Json(ConditionResponse {
            condition: parsed.as_str().to_owned(),
            good: advice.good.iter().map(|s| (*s).to_owned()).collect(),
            avoid: advice.avoid.iter().map(|s| (*s).to_owned()).collect(),
            tips: advice.tips.to_owned(),
            dishes: advice.dishes.to_owned(),
        }))
    }
}
