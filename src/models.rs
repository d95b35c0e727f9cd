// ABOUTME: Common data models for moods and nutrition records
// ABOUTME: Defines the closed mood set and provider-tagged nutrition output
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Core data models shared across the library and the HTTP layer

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The closed set of moods the service understands
///
/// The variant order is meaningful: reverse-index construction and the
/// `/api/moods` listing both follow declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    /// Upbeat, celebratory eating
    Happy,
    /// Comfort food territory
    Sad,
    /// Calming, low-stimulation choices
    Stressed,
    /// Energy-dense, protein-forward choices
    Tired,
    /// Street food and party snacks
    Excited,
    /// Novelty snacking
    Bored,
    /// Gentle, easy-to-digest choices
    Anxious,
    /// Light, fresh choices
    Relaxed,
    /// Nutrient-dense choices for pregnancy
    Pregnancy,
}

impl Mood {
    /// All moods in declaration order
    pub const ALL: [Self; 9] = [
        Self::Happy,
        Self::Sad,
        Self::Stressed,
        Self::Tired,
        Self::Excited,
        Self::Bored,
        Self::Anxious,
        Self::Relaxed,
        Self::Pregnancy,
    ];

    /// Canonical capitalized label for this mood
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Stressed => "Stressed",
            Self::Tired => "Tired",
            Self::Excited => "Excited",
            Self::Bored => "Bored",
            Self::Anxious => "Anxious",
            Self::Relaxed => "Relaxed",
            Self::Pregnancy => "Pregnancy",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "stressed" => Ok(Self::Stressed),
            "tired" => Ok(Self::Tired),
            "excited" => Ok(Self::Excited),
            "bored" => Ok(Self::Bored),
            "anxious" => Ok(Self::Anxious),
            "relaxed" => Ok(Self::Relaxed),
            "pregnancy" => Ok(Self::Pregnancy),
            _ => Err(AppError::invalid_input(format!("Unknown mood: {s}"))),
        }
    }
}

/// Which step of the lookup chain produced a nutrition record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutritionSource {
    /// Edamam nutrition-data API
    Edamam,
    /// USDA `FoodData` Central API
    Usda,
    /// Local mood-aware estimate
    Heuristic,
}

impl NutritionSource {
    /// Lowercase label used in API payloads and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Edamam => "edamam",
            Self::Usda => "usda",
            Self::Heuristic => "heuristic",
        }
    }
}

impl Display for NutritionSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition facts for a single food name
///
/// Transient output of a lookup; never persisted. `vitamins` is a
/// display-ready joined string ("B, C") rather than a structured list
/// because the providers disagree on vitamin taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Energy in kilocalories
    pub calories: u32,
    /// Protein in grams, rounded to one decimal place
    pub protein_g: f64,
    /// Vitamin labels joined with ", ", or "Various" when unknown
    pub vitamins: String,
    /// Which lookup step produced this record
    pub source: NutritionSource,
}
