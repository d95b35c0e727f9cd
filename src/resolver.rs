// ABOUTME: Nutrition resolution chain: Edamam, then USDA, then the heuristic
// ABOUTME: LRU-cached with diagnostics accumulating every failed attempt
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition resolver
//!
//! Walks the provider chain in order and falls back to the mood-aware
//! heuristic when every provider fails. Each failure reason is kept, so a
//! resolution carries a diagnostic describing every attempt that did not
//! produce the record. Results, heuristic ones included, are cached in a
//! bounded LRU keyed by the trimmed lowercased food name.
//!
//! The cache lock is a `std::sync::Mutex` and is never held across an await;
//! lookups release it before any provider I/O starts.

use crate::constants::nutrition::{DEFAULT_CACHE_CAPACITY, DIAGNOSTIC_SEPARATOR};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{classify, estimate};
use crate::models::{Mood, NutritionRecord};
use crate::pools::ReverseIndex;
use crate::providers::NutritionProvider;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Outcome of one nutrition resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Mood inferred for the food, when classification succeeded
    pub mood: Option<Mood>,
    /// The resolved nutrition record
    pub record: NutritionRecord,
    /// Failure reasons from earlier attempts, joined with " | "
    pub diagnostic: Option<String>,
}

/// Provider chain with a bounded result cache
pub struct NutritionResolver {
    providers: Vec<Arc<dyn NutritionProvider>>,
    index: ReverseIndex,
    cache: Mutex<LruCache<String, Resolution>>,
}

impl NutritionResolver {
    /// Create a resolver over the given provider chain
    ///
    /// Providers are tried in the order given. A zero capacity falls back to
    /// the default cache size.
    #[must_use]
    pub fn new(
        providers: Vec<Arc<dyn NutritionProvider>>,
        index: ReverseIndex,
        cache_capacity: usize,
    ) -> Self {
        let capacity = NonZeroUsize::new(cache_capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            providers,
            index,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Resolve nutrition for a food name
    ///
    /// Checks the cache, then each provider in order, then the heuristic.
    /// The heuristic never fails, so this only errs on blank input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the trimmed food name is empty.
    pub async fn resolve(&self, food: &str) -> AppResult<Resolution> {
        let trimmed = food.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("Food name must not be blank"));
        }
        let key = trimmed.to_lowercase();

        if let Some(hit) = self.cache_get(&key) {
            debug!(food = %trimmed, "nutrition cache hit");
            return Ok(hit);
        }

        let mood = classify(trimmed, &self.index);
        let mut reasons: Vec<String> = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.fetch(trimmed).await {
                Ok(record) => {
                    info!(
                        food = %trimmed,
                        provider = provider.name(),
                        attempts_failed = reasons.len(),
                        "nutrition resolved"
                    );
                    let resolution = Resolution {
                        mood,
                        record,
                        diagnostic: join_reasons(&reasons),
                    };
                    self.cache_put(key, resolution.clone());
                    return Ok(resolution);
                }
                Err(failure) => {
                    debug!(
                        food = %trimmed,
                        provider = provider.name(),
                        reason = %failure,
                        "provider attempt failed"
                    );
                    reasons.push(failure.to_string());
                }
            }
        }

        let record = estimate(trimmed, mood, &mut rand::thread_rng());
        info!(
            food = %trimmed,
            attempts_failed = reasons.len(),
            "nutrition estimated heuristically"
        );
        let resolution = Resolution {
            mood,
            record,
            diagnostic: join_reasons(&reasons),
        };
        self.cache_put(key, resolution.clone());
        Ok(resolution)
    }

    /// Number of cached resolutions
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn cache_get(&self, key: &str) -> Option<Resolution> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn cache_put(&self, key: String, resolution: Resolution) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, resolution);
    }
}

fn join_reasons(reasons: &[String]) -> Option<String> {
    if reasons.is_empty() {
        None
    } else {
        Some(reasons.join(DIAGNOSTIC_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_join_with_the_diagnostic_separator() {
        assert_eq!(join_reasons(&[]), None);
        assert_eq!(
            join_reasons(&["Edamam keys not set".to_owned(), "USDA key not set".to_owned()]),
            Some("Edamam keys not set | USDA key not set".to_owned())
        );
    }
}
