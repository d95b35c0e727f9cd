// ABOUTME: Reverse lookup from lowercased food name to its originating mood
// ABOUTME: Built once from the default pools; collisions resolve first-write-wins
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Reverse index
//!
//! Maps lowercased food names back to the mood that seeded them. Built once
//! after pool construction, in mood declaration order. When the same name
//! appears under two moods the first writer wins and the collision is logged,
//! so the outcome does not depend on map iteration order.

use crate::models::Mood;
use std::collections::HashMap;
use tracing::warn;

/// Lowercased food name to mood lookup
#[derive(Debug, Default)]
pub struct ReverseIndex {
    map: HashMap<String, Mood>,
}

impl ReverseIndex {
    /// Build the index from per-mood pools, visiting moods in declaration order
    #[must_use]
    pub fn build(pools: &HashMap<Mood, Vec<String>>) -> Self {
        let mut map: HashMap<String, Mood> = HashMap::new();
        for mood in Mood::ALL {
            let Some(pool) = pools.get(&mood) else {
                continue;
            };
            for item in pool {
                let key = item.to_lowercase();
                if let Some(existing) = map.get(&key) {
                    if *existing != mood {
                        warn!(
                            item = %item,
                            kept = %existing,
                            ignored = %mood,
                            "food name seeded under two moods; keeping first"
                        );
                    }
                    continue;
                }
                map.insert(key, mood);
            }
        }
        Self { map }
    }

    /// Exact case-insensitive lookup
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Mood> {
        self.map.get(&name.trim().to_lowercase()).copied()
    }

    /// Number of indexed names
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pools_of(entries: &[(Mood, &[&str])]) -> HashMap<Mood, Vec<String>> {
        entries
            .iter()
            .map(|(mood, items)| (*mood, items.iter().map(|i| (*i).to_owned()).collect()))
            .collect()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = ReverseIndex::build(&pools_of(&[(Mood::Happy, &["Gulab Jamun"])]));
        assert_eq!(index.lookup("gulab jamun"), Some(Mood::Happy));
        assert_eq!(index.lookup("  GULAB JAMUN  "), Some(Mood::Happy));
        assert_eq!(index.lookup("unknown"), None);
    }

    #[test]
    fn collisions_keep_the_first_mood_in_declaration_order() {
        // Happy precedes Sad in declaration order, so Happy wins regardless
        // of map insertion order.
        let index = ReverseIndex::build(&pools_of(&[
            (Mood::Sad, &["Curd Rice"]),
            (Mood::Happy, &["Curd Rice"]),
        ]));
        assert_eq!(index.lookup("curd rice"), Some(Mood::Happy));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn built_from_default_pools_covers_every_mood() {
        let pools = crate::pools::builder::build_default_pools();
        let index = ReverseIndex::build(&pools);
        assert!(!index.is_empty());
        assert_eq!(index.lookup("Gulab Jamun"), Some(Mood::Happy));
    }
}
