// ABOUTME: Edamam nutrition-data API client returning typed nutrition records
// ABOUTME: Fails fast with a short reason when keys are absent or the API errs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Edamam provider
//!
//! Queries the Edamam nutrition-data endpoint with the configured app id and
//! key. Vitamins are the labels of every `totalNutrients` entry whose code
//! starts with `VIT`; when none are present the record says "Various".

use super::{NutritionProvider, ProviderFailure};
use crate::config::EdamamApiConfig;
use crate::constants::nutrition::EDAMAM_TIMEOUT_SECS;
use crate::models::{NutritionRecord, NutritionSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct EdamamResponse {
    #[serde(default)]
    calories: f64,
    #[serde(default, rename = "totalNutrients")]
    total_nutrients: BTreeMap<String, EdamamNutrient>,
}

#[derive(Debug, Deserialize)]
struct EdamamNutrient {
    #[serde(default)]
    label: String,
    #[serde(default)]
    quantity: f64,
}

/// Edamam nutrition-data client
pub struct EdamamProvider {
    config: EdamamApiConfig,
    client: reqwest::Client,
}

impl EdamamProvider {
    /// Create a provider from the Edamam configuration
    #[must_use]
    pub fn new(config: EdamamApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NutritionProvider for EdamamProvider {
    fn name(&self) -> &'static str {
        "edamam"
    }

    async fn fetch(&self, food: &str) -> Result<NutritionRecord, ProviderFailure> {
        let (Some(app_id), Some(app_key)) = (&self.config.app_id, &self.config.app_key) else {
            return Err(ProviderFailure::NotConfigured(
                "Edamam keys not set".to_owned(),
            ));
        };

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("app_id", app_id.as_str()),
                ("app_key", app_key.as_str()),
                ("ingr", food),
            ])
            .timeout(Duration::from_secs(EDAMAM_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| ProviderFailure::Transport(format!("Edamam error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderFailure::BadStatus(format!(
                "Edamam HTTP {}",
                status.as_u16()
            )));
        }

        let data: EdamamResponse = response
            .json()
            .await
            .map_err(|e| ProviderFailure::Transport(format!("Edamam error: {e}")))?;

        let protein = data
            .total_nutrients
            .get("PROCNT")
            .map_or(0.0, |n| n.quantity);

        let vitamins: Vec<&str> = data
            .total_nutrients
            .iter()
            .filter(|(code, _)| code.starts_with("VIT"))
            .map(|(_, nutrient)| nutrient.label.as_str())
            .collect();
        let vitamins = if vitamins.is_empty() {
            "Various".to_owned()
        } else {
            vitamins.join(", ")
        };

        debug!(food = %food, calories = data.calories, "edamam lookup succeeded");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(NutritionRecord {
            calories: data.calories.max(0.0) as u32,
            protein_g: (protein * 10.0).round() / 10.0,
            vitamins,
            source: NutritionSource::Edamam,
        })
    }
}
