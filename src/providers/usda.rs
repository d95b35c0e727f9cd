// ABOUTME: USDA FoodData Central search client returning typed nutrition records
// ABOUTME: Scans foodNutrients by name for energy, protein, and vitamin entries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! USDA provider
//!
//! Searches `FoodData` Central for the food name and reads nutrition off the
//! first hit. Nutrients are matched by lowercased name, so minor catalogue
//! renames keep working; later entries overwrite earlier ones for the same
//! slot, matching the order the API reports them in.

use super::{NutritionProvider, ProviderFailure};
use crate::config::UsdaApiConfig;
use crate::constants::nutrition::USDA_TIMEOUT_SECS;
use crate::models::{NutritionRecord, NutritionSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const VITAMIN_MARKERS: &[&str] = &[
    "vitamin", "vit a", "vit c", "vit d", "vit b", "folate", "iron", "calcium",
];

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodHit>,
}

#[derive(Debug, Deserialize)]
struct FoodHit {
    #[serde(default, rename = "foodNutrients")]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrient {
    #[serde(default, rename = "nutrientName")]
    nutrient_name: String,
    #[serde(default)]
    value: f64,
}

/// USDA `FoodData` Central client
pub struct UsdaProvider {
    config: UsdaApiConfig,
    client: reqwest::Client,
}

impl UsdaProvider {
    /// Create a provider from the USDA configuration
    #[must_use]
    pub fn new(config: UsdaApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NutritionProvider for UsdaProvider {
    fn name(&self) -> &'static str {
        "usda"
    }

    async fn fetch(&self, food: &str) -> Result<NutritionRecord, ProviderFailure> {
        let Some(api_key) = &self.config.api_key else {
            return Err(ProviderFailure::NotConfigured("USDA key not set".to_owned()));
        };

        let url = format!("{}/foods/search", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("api_key", api_key.as_str())])
            .json(&serde_json::json!({ "query": food, "pageSize": 1 }))
            .timeout(Duration::from_secs(USDA_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| ProviderFailure::Transport(format!("USDA error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderFailure::BadStatus(format!(
                "USDA HTTP {}",
                status.as_u16()
            )));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderFailure::Transport(format!("USDA error: {e}")))?;

        let Some(hit) = data.foods.first() else {
            return Err(ProviderFailure::NoData("USDA: no results".to_owned()));
        };

        let mut calories = 0.0;
        let mut protein = 0.0;
        let mut vitamins: Vec<&str> = Vec::new();
        for nutrient in &hit.food_nutrients {
            let name = nutrient.nutrient_name.to_lowercase();
            if name.contains("energy") || name.contains("calorie") {
                calories = nutrient.value;
            } else if name.contains("protein") {
                protein = nutrient.value;
            } else if VITAMIN_MARKERS.iter().any(|marker| name.contains(marker)) {
                vitamins.push(nutrient.nutrient_name.as_str());
            }
        }
        let vitamins = if vitamins.is_empty() {
            "Various".to_owned()
        } else {
            vitamins.join(", ")
        };

        debug!(food = %food, calories, "usda lookup succeeded");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(NutritionRecord {
            calories: calories.max(0.0) as u32,
            protein_g: (protein * 10.0).round() / 10.0,
            vitamins,
            source: NutritionSource::Usda,
        })
    }
}
