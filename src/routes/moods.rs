// ABOUTME: Route handlers for mood listing, pool retrieval, and pool mutation
// ABOUTME: Unknown moods are 404s; pool item validation happens in the store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Mood pool routes
//!
//! Endpoints for listing moods, reading a mood's pool, sampling suggestions
//! from it, and the admin add/remove mutations. Mood path segments that do
//! not name a known mood resolve to 404 rather than 400, because the mood set
//! is closed and the segment is part of the resource path.

use super::ServerResources;
use crate::errors::AppError;
use crate::models::Mood;
use crate::suggestions;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Response listing every known mood
#[derive(Debug, Serialize, Deserialize)]
pub struct MoodsResponse {
    /// Mood labels in declaration order
    pub moods: Vec<String>,
}

/// Response carrying one mood's pool
#[derive(Debug, Serialize, Deserialize)]
pub struct PoolResponse {
    /// The mood this pool belongs to
    pub mood: String,
    /// Number of items in the pool
    pub count: usize,
    /// Pool items in insertion order
    pub items: Vec<String>,
}

/// Query parameters for suggestion sampling
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Requested number of suggestions
    pub count: Option<usize>,
    /// Drop non-vegetarian names before sampling
    pub veg_only: Option<bool>,
}

/// Response carrying sampled suggestions
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// The mood sampled from
    pub mood: String,
    /// Number of suggestions returned
    pub count: usize,
    /// Whether the vegetarian filter was applied
    pub veg_only: bool,
    /// The sampled food names
    pub suggestions: Vec<String>,
}

/// Request body for adding a pool item
#[derive(Debug, Serialize, Deserialize)]
pub struct AddItemRequest {
    /// Food name to append
    pub name: String,
}

/// Response confirming a pool mutation
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemMutationResponse {
    /// The mood whose pool was mutated
    pub mood: String,
    /// The item name involved
    pub name: String,
}

/// Mood pool routes implementation
pub struct MoodRoutes;

impl MoodRoutes {
    /// Create all mood pool routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/moods", get(Self::handle_list_moods))
            .route("/api/pools/:mood", get(Self::handle_get_pool))
            .route(
                "/api/pools/:mood/suggestions",
                get(Self::handle_suggestions),
            )
            .route("/api/pools/:mood/items", post(Self::handle_add_item))
            .route(
                "/api/pools/:mood/items/:name",
                delete(Self::handle_remove_item),
            )
            .with_state(resources)
    }

    fn parse_mood(segment: &str) -> Result<Mood, AppError> {
        segment
            .parse()
            .map_err(|_| AppError::not_found(format!("Mood '{segment}'")))
    }

    async fn handle_list_moods() -> Json<MoodsResponse> {
        Json(MoodsResponse {
            moods: Mood::ALL.iter().map(|m| m.as_str().to_owned()).collect(),
        })
    }

    async fn handle_get_pool(
        State(resources): State<Arc<ServerResources>>,
        Path(mood): Path<String>,
    ) -> Result<Json<PoolResponse>, AppError> {
        let mood = Self::parse_mood(&mood)?;
        let items = resources.store.get_pool(mood).await;
        Ok(Json(PoolResponse {
            mood: mood.as_str().to_owned(),
            count: items.len(),
            items,
        }))
    }

    async fn handle_suggestions(
        State(resources): State<Arc<ServerResources>>,
        Path(mood): Path<String>,
        Query(query): Query<SuggestionsQuery>,
    ) -> Result<Json<SuggestionsResponse>, AppError> {
        let mood = Self::parse_mood(&mood)?;
        let pool = resources.store.get_pool(mood).await;
        if pool.is_empty() {
            return Err(AppError::not_found(format!("Pool for mood '{mood}'")));
        }
        let veg_only = query.veg_only.unwrap_or(false);
        let picked = suggestions::pick(&pool, query.count, veg_only, &mut rand::thread_rng());
        Ok(Json(SuggestionsResponse {
            mood: mood.as_str().to_owned(),
            count: picked.len(),
            veg_only,
            suggestions: picked,
        }))
    }

    async fn handle_add_item(
        State(resources): State<Arc<ServerResources>>,
        Path(mood): Path<String>,
        Json(request): Json<AddItemRequest>,
    ) -> Result<Response, AppError> {
        let mood = Self::parse_mood(&mood)?;
        resources.store.add_item(mood, &request.name).await?;
        info!(mood = %mood, item = %request.name.trim(), "pool item added");
        let body = Json(ItemMutationResponse {
            mood: mood.as_str().to_owned(),
            name: request.name.trim().to_owned(),
        });
        Ok((StatusCode::CREATED, body).into_response())
    }

    async fn handle_remove_item(
        State(resources): State<Arc<ServerResources>>,
        Path((mood, name)): Path<(String, String)>,
    ) -> Result<Json<ItemMutationResponse>, AppError> {
        let mood = Self::parse_mood(&mood)?;
        if !resources.store.remove_item(mood, &name).await {
            return Err(AppError::not_found(format!("Item '{name}'")));
        }
        info!(mood = %mood, item = %name, "pool item removed");
        Ok(Json(ItemMutationResponse {
            mood: mood.as_str().to_owned(),
            name,
        }))
    }
}
