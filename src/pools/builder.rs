// ABOUTME: Deterministic pool expansion, padding, and default pool construction
// ABOUTME: Pure string combination with case-insensitive first-seen dedup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Pool builder
//!
//! Expands per-mood seed lists into large candidate pools. Everything here is
//! deterministic: the same inputs always produce the same ordered output, so
//! the default pools can be rebuilt at any startup and match exactly.

use super::seeds::{self, FRUITY, PAD_SUFFIXES};
use crate::constants::pool_limits::{DEFAULT_POOL_CAP, MIN_POOL_SIZE, PAD_POOL_CAP};
use crate::models::Mood;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Expand a seed list into an ordered, case-insensitively unique pool
///
/// Output order: raw seeds, then prefix+seed combinations (prefixes outer),
/// then seed+suffix combinations (seeds outer), then the extras verbatim.
/// Entries are whitespace-trimmed; blanks are dropped; the first occurrence
/// of a name wins the dedup. The result is truncated to `max_count`.
#[must_use]
pub fn expand_pool(
    seeds: &[&str],
    prefixes: &[&str],
    suffixes: &[&str],
    extras: &[&str],
    max_count: usize,
) -> Vec<String> {
    let mut raw: Vec<String> = Vec::new();

    raw.extend(seeds.iter().map(|s| (*s).to_owned()));

    for prefix in prefixes {
        for seed in seeds {
            raw.push(format!("{prefix} {seed}"));
        }
    }

    for seed in seeds {
        for suffix in suffixes {
            raw.push(format!("{seed} {suffix}"));
        }
    }

    raw.extend(extras.iter().map(|s| (*s).to_owned()));

    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut pool: Vec<String> = Vec::with_capacity(raw.len());
    for item in raw {
        let trimmed = item.trim();
        let key = trimmed.to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        pool.push(trimmed.to_owned());
    }

    pool.truncate(max_count);
    pool
}

/// Pad an under-filled pool up to `min_size` using the fruit generator
///
/// Candidates are the cartesian product of [`FRUITY`] ingredients with the
/// [`PAD_SUFFIXES`] presentations, fruit outer, skipping any name already
/// present case-insensitively. Padding stops when `min_size` is reached or
/// the generator is exhausted; a padded pool is then capped at the padding
/// ceiling. Pools already at or above `min_size` are left untouched.
pub fn pad_pool(pool: &mut Vec<String>, min_size: usize) {
    if pool.len() >= min_size {
        return;
    }

    let mut seen: HashSet<String> = pool.iter().map(|item| item.to_lowercase()).collect();
    'generator: for fruit in FRUITY {
        for suffix in PAD_SUFFIXES {
            let candidate = format!("{fruit} {suffix}");
            if !seen.insert(candidate.to_lowercase()) {
                continue;
            }
            pool.push(candidate);
            if pool.len() >= min_size {
                break 'generator;
            }
        }
    }

    pool.truncate(PAD_POOL_CAP);
}

/// Build the default pool for every mood, in declaration order
///
/// Each pool is expanded from its recipe, padded to the configured minimum,
/// and capped at the default pool size.
#[must_use]
pub fn build_default_pools() -> HashMap<Mood, Vec<String>> {
    let mut pools: HashMap<Mood, Vec<String>> = HashMap::with_capacity(Mood::ALL.len());
    for mood in Mood::ALL {
        let recipe = seeds::recipe(mood);
        let mut pool = expand_pool(
            recipe.seeds,
            recipe.prefixes,
            recipe.suffixes,
            &recipe.extras,
            recipe.max_count,
        );
        pad_pool(&mut pool, MIN_POOL_SIZE);
        pool.truncate(DEFAULT_POOL_CAP);
        debug!(mood = %mood, items = pool.len(), "built default pool");
        pools.insert(mood, pool);
    }
    pools
}
