// ABOUTME: Random suggestion picking over a pool with an optional veg filter
// ABOUTME: Count is clamped to the configured bounds; sampling is replacement-free
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Suggestion picker
//!
//! Samples food names from a pool without replacement. The requested count is
//! clamped to the configured bounds, and the vegetarian filter drops any name
//! containing a non-veg marker before sampling. Randomness is injected so
//! callers control determinism in tests.

use crate::constants::suggestion_limits::{DEFAULT_SUGGESTIONS, MAX_SUGGESTIONS, MIN_SUGGESTIONS};
use rand::seq::SliceRandom;
use rand::Rng;

const NON_VEG_MARKERS: &[&str] = &["chicken", "mutton", "fish", "egg", "prawn"];

/// Clamp a requested suggestion count to the allowed bounds
///
/// `None` resolves to the default.
#[must_use]
pub fn clamp_count(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_SUGGESTIONS)
        .clamp(MIN_SUGGESTIONS, MAX_SUGGESTIONS)
}

/// Whether a food name passes the vegetarian filter
#[must_use]
pub fn is_vegetarian(name: &str) -> bool {
    let lowered = name.to_lowercase();
    !NON_VEG_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Pick up to `count` suggestions from a pool without replacement
///
/// With `veg_only`, non-vegetarian names are dropped before sampling. Fewer
/// than `count` items are returned when the (filtered) pool is smaller.
pub fn pick<R: Rng + ?Sized>(
    pool: &[String],
    count: Option<usize>,
    veg_only: bool,
    rng: &mut R,
) -> Vec<String> {
    let count = clamp_count(count);
    let candidates: Vec<&String> = if veg_only {
        pool.iter().filter(|name| is_vegetarian(name)).collect()
    } else {
        pool.iter().collect()
    };
    candidates
        .choose_multiple(rng, count.min(candidates.len()))
        .map(|name| (*name).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool_of(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn count_clamps_to_bounds_and_defaults() {
        assert_eq!(clamp_count(None), 5);
        assert_eq!(clamp_count(Some(0)), 1);
        assert_eq!(clamp_count(Some(3)), 3);
        assert_eq!(clamp_count(Some(99)), 10);
    }

    #[test]
    fn sampling_is_without_replacement() {
        let pool = pool_of(&["A", "B", "C", "D", "E", "F"]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick(&pool, Some(4), false, &mut rng);
        assert_eq!(picked.len(), 4);
        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn small_pools_return_everything_they_have() {
        let pool = pool_of(&["A", "B"]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick(&pool, Some(10), false, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn veg_filter_drops_non_veg_markers_case_insensitively() {
        assert!(is_vegetarian("Paneer Wrap"));
        assert!(!is_vegetarian("Grilled CHICKEN Bowl"));
        assert!(!is_vegetarian("Egg Bhurji"));

        let pool = pool_of(&["Paneer Wrap", "Chicken Roll", "Prawn Curry", "Dal Bowl"]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick(&pool, Some(10), true, &mut rng);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|name| is_vegetarian(name)));
    }

    #[test]
    fn fully_filtered_pools_yield_no_suggestions() {
        let pool = pool_of(&["Chicken Roll", "Fish Fry"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick(&pool, None, true, &mut rng).is_empty());
    }
}
