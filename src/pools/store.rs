// ABOUTME: Pool storage trait and in-memory RwLock-guarded implementation
// ABOUTME: Ordered retrieval plus admin add/remove over per-mood pools
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Pool storage
//!
//! The [`PoolStore`] trait is the runtime surface over the per-mood pools:
//! ordered retrieval plus the admin add/remove mutations. The in-memory
//! implementation is seeded once at startup with the builder output. The
//! reverse index is derived from the seeded pools and is not refreshed when
//! the store is mutated afterwards; readers of the two may observe transient
//! divergence.

use crate::errors::{AppError, AppResult};
use crate::models::Mood;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage abstraction over per-mood food pools
#[async_trait]
pub trait PoolStore: Send + Sync {
    /// The ordered pool for a mood (insertion order preserved)
    async fn get_pool(&self, mood: Mood) -> Vec<String>;

    /// Append an item to a mood's pool
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the trimmed name is empty.
    async fn add_item(&self, mood: Mood, name: &str) -> AppResult<()>;

    /// Remove the first case-insensitive match from a mood's pool
    ///
    /// Returns whether anything was removed.
    async fn remove_item(&self, mood: Mood, name: &str) -> bool;
}

/// In-memory pool store guarded by a read-write lock
pub struct MemoryPoolStore {
    pools: RwLock<HashMap<Mood, Vec<String>>>,
}

impl MemoryPoolStore {
    /// Create a store seeded with the given pools
    #[must_use]
    pub fn seeded(pools: HashMap<Mood, Vec<String>>) -> Self {
        Self {
            pools: RwLock::new(pools),
        }
    }

    /// Create an empty store (every mood resolves to an empty pool)
    #[must_use]
    pub fn empty() -> Self {
        Self::seeded(HashMap::new())
    }
}

#[async_trait]
impl PoolStore for MemoryPoolStore {
    async fn get_pool(&self, mood: Mood) -> Vec<String> {
        let pools = self.pools.read().await;
        pools.get(&mood).cloned().unwrap_or_default()
    }

    async fn add_item(&self, mood: Mood, name: &str) -> AppResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("Item name must not be blank"));
        }
        let mut pools = self.pools.write().await;
        pools.entry(mood).or_default().push(trimmed.to_owned());
        Ok(())
    }

    async fn remove_item(&self, mood: Mood, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        let mut pools = self.pools.write().await;
        let Some(pool) = pools.get_mut(&mood) else {
            return false;
        };
        let Some(position) = pool.iter().position(|item| item.to_lowercase() == needle) else {
            return false;
        };
        pool.remove(position);
        true
    }
}
