// ABOUTME: External nutrition data providers behind one async trait
// ABOUTME: Edamam and USDA clients plus the shared failure-reason type
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition providers
//!
//! Each provider wraps one external nutrition API behind the
//! [`NutritionProvider`] trait. Failures are reported as short
//! [`ProviderFailure`] reasons so the resolver can chain providers and
//! surface every attempt in its diagnostic string.

/// Edamam nutrition-data client
pub mod edamam;

/// USDA `FoodData` Central client
pub mod usda;

use crate::models::NutritionRecord;
use async_trait::async_trait;

pub use edamam::EdamamProvider;
pub use usda::UsdaProvider;

/// Why a provider could not produce a record
///
/// The display string is the exact reason that ends up in resolver
/// diagnostics, so variants keep their messages short and stable.
#[derive(Debug, thiserror::Error)]
pub enum ProviderFailure {
    /// Required credentials are absent from the configuration
    #[error("{0}")]
    NotConfigured(String),

    /// The API answered with a non-success status
    #[error("{0}")]
    BadStatus(String),

    /// The API answered but had no usable data
    #[error("{0}")]
    NoData(String),

    /// Transport-level failure (connect, timeout, decode)
    #[error("{0}")]
    Transport(String),
}

/// One external source of nutrition data
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Short provider name used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Fetch nutrition for a food name
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderFailure`] describing why no record was produced;
    /// the resolver folds the reason into its diagnostic string.
    async fn fetch(&self, food: &str) -> Result<NutritionRecord, ProviderFailure>;
}
