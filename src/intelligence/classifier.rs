// ABOUTME: Food name to mood classification via exact lookup then keyword rules
// ABOUTME: Rule order is fixed; the first matching rule decides the mood
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Mood classifier
//!
//! Two-stage classification: an exact case-insensitive lookup against the
//! reverse index, then substring keyword rules applied in a fixed priority
//! order. Earlier rules win, so a name matching both "taco" and "salad"
//! classifies as Excited, not Relaxed. Names matching nothing return `None`.

use crate::models::Mood;
use crate::pools::ReverseIndex;

/// Keyword rules in priority order; the first rule containing a matching
/// substring decides the mood.
const RULES: &[(&[&str], Mood)] = &[
    (
        &[
            "pani puri",
            "sev puri",
            "nachos",
            "taco",
            "fries",
            "frankie",
            "roll",
            "momo",
            "momos",
            "manchurian",
            "schezwan",
        ],
        Mood::Excited,
    ),
    (
        &[
            "khichdi", "dal rice", "porridge", "curd", "oats", "soup", "stew", "idli", "uttapam",
            "poha", "upma",
        ],
        Mood::Sad,
    ),
    (
        &[
            "green tea",
            "herbal",
            "chamomile",
            "cucumber",
            "yogurt",
            "parfait",
            "sprout",
            "chia",
            "coconut water",
            "turmeric",
        ],
        Mood::Stressed,
    ),
    (
        &[
            "smoothie", "peanut", "protein", "paneer", "tofu", "egg", "chicken", "tuna", "salmon",
            "sprouts", "quinoa",
        ],
        Mood::Tired,
    ),
    (
        &[
            "brownie",
            "donut",
            "cupcake",
            "cheesecake",
            "pizza",
            "burger",
            "biryani",
            "pav bhaji",
            "shawarma",
        ],
        Mood::Happy,
    ),
    (
        &["cookies", "waffle", "pancake", "popcorn", "candy", "churros", "fudge"],
        Mood::Bored,
    ),
    (
        &["buttermilk", "light", "clear soup", "makhana", "low sugar"],
        Mood::Anxious,
    ),
    (
        &["salad", "buddha bowl", "stir-fry", "grilled", "minestrone", "zucchini"],
        Mood::Relaxed,
    ),
    (
        &["folate", "iron", "ragi", "sesame", "dates", "ladoo", "preg"],
        Mood::Pregnancy,
    ),
];

/// Classify a food name into a mood
///
/// Tries the exact reverse-index lookup first, then the keyword rules in
/// priority order. Returns `None` when nothing matches.
#[must_use]
pub fn classify(name: &str, index: &ReverseIndex) -> Option<Mood> {
    if let Some(mood) = index.lookup(name) {
        return Some(mood);
    }

    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    for (keywords, mood) in RULES {
        if keywords.iter().any(|keyword| needle.contains(keyword)) {
            return Some(*mood);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::build_default_pools;

    fn default_index() -> ReverseIndex {
        ReverseIndex::build(&build_default_pools())
    }

    #[test]
    fn exact_pool_names_win_over_keyword_rules() {
        let index = default_index();
        assert_eq!(classify("Gulab Jamun", &index), Some(Mood::Happy));
        assert_eq!(classify("  gulab jamun  ", &index), Some(Mood::Happy));
    }

    #[test]
    fn unknown_names_fall_back_to_keyword_rules() {
        let index = ReverseIndex::default();
        assert_eq!(classify("Some Unknown Salad Dish", &index), Some(Mood::Relaxed));
        assert_eq!(classify("Midnight Brownie Stack", &index), Some(Mood::Happy));
        assert_eq!(classify("Homemade Khichdi Special", &index), Some(Mood::Sad));
    }

    #[test]
    fn earlier_rules_take_priority() {
        let index = ReverseIndex::default();
        // "taco" (Excited) outranks "salad" (Relaxed).
        assert_eq!(classify("Taco Salad", &index), Some(Mood::Excited));
        // "soup" (Sad) outranks "clear soup" (Anxious).
        assert_eq!(classify("Clear Soup", &index), Some(Mood::Sad));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let index = ReverseIndex::default();
        assert_eq!(classify("MOMO platter deluxe", &index), Some(Mood::Excited));
        assert_eq!(classify("prego-PREGNANCY mix", &index), Some(Mood::Pregnancy));
    }

    #[test]
    fn unmatched_names_return_none() {
        let index = ReverseIndex::default();
        assert_eq!(classify("Mystery Dish", &index), None);
        assert_eq!(classify("", &index), None);
        assert_eq!(classify("   ", &index), None);
    }
}
