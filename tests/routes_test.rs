// ABOUTME: Integration tests for the HTTP API surface
// ABOUTME: Exercises mood, pool, suggestion, nutrition, condition, and health routes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Integration tests for the HTTP routes

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use moodfood_server::routes;
use moodfood_server::suggestions::is_vegetarian;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    routes::router(common::create_test_resources())
}

async fn body_json(response: Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn get(app: Router, uri: &str) -> Result<Response> {
    Ok(app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?)
}

#[tokio::test]
async fn test_list_moods_returns_all_nine_in_order() -> Result<()> {
    let response = get(test_app(), "/api/moods").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    let moods: Vec<&str> = body["moods"]
        .as_array()
        .expect("moods array")
        .iter()
        .map(|m| m.as_str().expect("mood string"))
        .collect();
    assert_eq!(
        moods,
        vec![
            "Happy",
            "Sad",
            "Stressed",
            "Tired",
            "Excited",
            "Bored",
            "Anxious",
            "Relaxed",
            "Pregnancy"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_get_pool_ignores_mood_case() -> Result<()> {
    let response = get(test_app(), "/api/pools/hAppY").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["mood"], "Happy");
    let count = usize::try_from(body["count"].as_u64().expect("count"))?;
    assert!((70..=100).contains(&count));
    assert_eq!(body["items"].as_array().expect("items array").len(), count);
    Ok(())
}

#[tokio::test]
async fn test_get_pool_for_unknown_mood_is_404() -> Result<()> {
    let response = get(test_app(), "/api/pools/hangry").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_suggestions_honor_requested_count() -> Result<()> {
    let response = get(test_app(), "/api/pools/happy/suggestions?count=3").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["mood"], "Happy");
    assert_eq!(body["count"], 3);
    assert_eq!(body["suggestions"].as_array().expect("suggestions").len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_suggestion_count_is_clamped_to_ten() -> Result<()> {
    let response = get(test_app(), "/api/pools/sad/suggestions?count=50").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["count"], 10);
    assert_eq!(
        body["suggestions"].as_array().expect("suggestions").len(),
        10
    );
    Ok(())
}

#[tokio::test]
async fn test_veg_only_suggestions_exclude_non_veg_dishes() -> Result<()> {
    let response = get(
        test_app(),
        "/api/pools/excited/suggestions?count=10&veg_only=true",
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["veg_only"], true);
    for suggestion in body["suggestions"].as_array().expect("suggestions") {
        let name = suggestion.as_str().expect("suggestion string");
        assert!(is_vegetarian(name), "{name} is not vegetarian");
    }
    Ok(())
}

#[tokio::test]
async fn test_suggestions_from_empty_pool_are_404() -> Result<()> {
    let app = routes::router(common::create_empty_pool_resources());
    let response = get(app, "/api/pools/happy/suggestions").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_add_item_trims_name_and_lands_in_pool() -> Result<()> {
    let resources = common::create_test_resources();
    let app = routes::router(resources);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pools/bored/items")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "  Midnight Nachos  "}).to_string(),
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await?;
    assert_eq!(body["mood"], "Bored");
    assert_eq!(body["name"], "Midnight Nachos");

    let pool = body_json(get(app, "/api/pools/bored").await?).await?;
    let items = pool["items"].as_array().expect("items");
    assert!(items.iter().any(|i| i == "Midnight Nachos"));
    Ok(())
}

#[tokio::test]
async fn test_add_item_rejects_blank_names() -> Result<()> {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pools/happy/items")
                .header("content-type", "application/json")
                .body(Body::from(json!({"name": "   "}).to_string()))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_remove_item_round_trip_then_404() -> Result<()> {
    let app = routes::router(common::create_test_resources());

    let added = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pools/sad/items")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "Warm Rice Pudding"}).to_string(),
                ))?,
        )
        .await?;
    assert_eq!(added.status(), StatusCode::CREATED);

    let removed = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/pools/Sad/items/Warm%20Rice%20Pudding")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(removed.status(), StatusCode::OK);
    let body = body_json(removed).await?;
    assert_eq!(body["name"], "Warm Rice Pudding");

    let missing = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/pools/Sad/items/Warm%20Rice%20Pudding")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_nutrition_lookup_falls_back_to_heuristic() -> Result<()> {
    let response = get(test_app(), "/api/nutrition?food=Gulab%20Jamun").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["food"], "Gulab Jamun");
    assert_eq!(body["mood"], "Happy");
    assert_eq!(body["source"], "heuristic");
    assert!(body["calories"].as_u64().expect("calories") > 0);
    assert!(body.get("diagnostic").is_none());
    Ok(())
}

#[tokio::test]
async fn test_nutrition_without_food_param_is_400() -> Result<()> {
    let response = get(test_app(), "/api/nutrition").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_list_conditions_returns_all_five() -> Result<()> {
    let response = get(test_app(), "/api/conditions").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    let conditions = body["conditions"].as_array().expect("conditions");
    assert_eq!(conditions.len(), 5);
    assert!(conditions.iter().any(|c| c == "High Blood Pressure"));
    Ok(())
}

#[tokio::test]
async fn test_condition_advice_for_diabetes() -> Result<()> {
    let response = get(test_app(), "/api/conditions/diabetes").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["condition"], "Diabetes");
    assert!(!body["good"].as_array().expect("good").is_empty());
    assert!(!body["avoid"].as_array().expect("avoid").is_empty());
    assert!(body["tips"]
        .as_str()
        .expect("tips")
        .to_lowercase()
        .contains("green tea"));
    Ok(())
}

#[tokio::test]
async fn test_condition_lookup_accepts_hyphenated_names() -> Result<()> {
    let response = get(test_app(), "/api/conditions/high-blood-pressure").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["condition"], "High Blood Pressure");
    Ok(())
}

#[tokio::test]
async fn test_unknown_condition_is_404() -> Result<()> {
    let response = get(test_app(), "/api/conditions/migraine").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_health_and_readiness_endpoints() -> Result<()> {
    let health = body_json(get(test_app(), "/health").await?).await?;
    assert_eq!(health["status"], "healthy");
    assert!(health["timestamp"].is_string());

    let ready = body_json(get(test_app(), "/ready").await?).await?;
    assert_eq!(ready["status"], "ready");
    Ok(())
}
