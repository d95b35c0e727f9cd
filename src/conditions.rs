// ABOUTME: Health condition dietary guidance: curated good/avoid/tips/dishes
// ABOUTME: Static content keyed by a closed condition enum with lenient parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Health condition guidance
//!
//! Curated dietary advice for a closed set of health conditions. Content is
//! static and versioned with the code. Parsing is lenient about separators so
//! URL path segments like `high-blood-pressure` and `cough_and_cold` resolve.

use crate::errors::AppError;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Health conditions with curated dietary guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HealthCondition {
    /// Pregnancy nutrition
    Pregnancy,
    /// Blood sugar management
    Diabetes,
    /// Hypertension
    HighBloodPressure,
    /// Fever recovery
    Fever,
    /// Cough and cold recovery
    CoughAndCold,
}

impl HealthCondition {
    /// All conditions in declaration order
    pub const ALL: [Self; 5] = [
        Self::Pregnancy,
        Self::Diabetes,
        Self::HighBloodPressure,
        Self::Fever,
        Self::CoughAndCold,
    ];

    /// Human-readable label for this condition
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pregnancy => "Pregnancy",
            Self::Diabetes => "Diabetes",
            Self::HighBloodPressure => "High Blood Pressure",
            Self::Fever => "Fever",
            Self::CoughAndCold => "Cough & Cold",
        }
    }
}

impl Display for HealthCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "pregnancy" => Ok(Self::Pregnancy),
            "diabetes" => Ok(Self::Diabetes),
            "highbloodpressure" | "highbp" | "hypertension" => Ok(Self::HighBloodPressure),
            "fever" => Ok(Self::Fever),
            "coughandcold" | "coughcold" | "cough" | "cold" => Ok(Self::CoughAndCold),
            _ => Err(AppError::invalid_input(format!("Unknown condition: {s}"))),
        }
    }
}

/// Dietary guidance for one health condition
#[derive(Debug, Clone, Serialize)]
pub struct ConditionAdvice {
    /// The condition this advice applies to
    pub condition: HealthCondition,
    /// Foods to favor
    pub good: &'static [&'static str],
    /// Foods to avoid
    pub avoid: &'static [&'static str],
    /// Lifestyle and eating tips
    pub tips: &'static str,
    /// Suggested dishes, comma-joined
    pub dishes: &'static str,
}

/// Curated advice for a condition
#[must_use]
pub const fn advice(condition: HealthCondition) -> ConditionAdvice {
    match condition {
        HealthCondition::Pregnancy => ConditionAdvice {
            condition,
            good: &[
                "Milk",
                "Nuts",
                "Leafy veg",
                "Fruits",
                "Whole grains",
                "Lentils",
                "Eggs",
            ],
            avoid: &["Raw papaya", "Excess pineapple", "Alcohol"],
            tips: "Eat small, frequent meals. Stay hydrated. Do light exercise like walking.",
            dishes: "Dal Khichdi, Almond Milk, Spinach Salad",
        },
        HealthCondition::Diabetes => ConditionAdvice {
            condition,
            good: &["Oats", "Brown rice", "Vegetables", "Dal", "Nuts"],
            avoid: &["Sweets", "Sugary drinks"],
            tips: "Monitor sugar levels daily. Prefer green tea. 30 min walk daily.",
            dishes: "Moong Dal Chilla, Veg Soup, Green Tea",
        },
        HealthCondition::HighBloodPressure => ConditionAdvice {
            condition,
            good: &["Fruits", "Veg", "Low-salt dals", "Oats"],
            avoid: &["Pickles", "Processed foods"],
            tips: "Limit salt intake. Eat potassium-rich foods like banana. Practice meditation.",
            dishes: "Oats Upma, Banana Smoothie, Steamed Veggies",
        },
        HealthCondition::Fever => ConditionAdvice {
            condition,
            good: &["Soups", "Khichdi", "Hydration"],
            avoid: &["Greasy heavy food"],
            tips: "Drink warm fluids. Take rest. Eat light, easy-to-digest foods.",
            dishes: "Vegetable Soup, Soft Khichdi, Herbal Tea",
        },
        HealthCondition::CoughAndCold => ConditionAdvice {
            condition,
            good: &["Ginger tea", "Warm soups", "Honey"],
            avoid: &["Cold drinks", "Ice cream"],
            tips: "Gargle with warm salt water. Drink herbal teas. Keep warm & avoid dust.",
            dishes: "Ginger-Honey Tea, Tulsi Kadha, Tomato Soup",
        },
    }
}
