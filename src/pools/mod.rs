// ABOUTME: Mood food pool construction, storage, and reverse lookup
// ABOUTME: Builder and seeds are pure; the store is the mutable runtime surface
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Mood food pools
//!
//! A pool is an ordered list of food names for one mood. Default pools are
//! built deterministically at startup from the seed tables and expansion
//! recipes in [`seeds`], then handed to a [`store::PoolStore`] for runtime
//! access and admin mutation. The [`reverse_index::ReverseIndex`] is derived
//! once from the default pools and intentionally not refreshed afterwards.

/// Deterministic pool expansion and padding
pub mod builder;

/// Item name to mood lookup built from the default pools
pub mod reverse_index;

/// Seed tables, building blocks, and per-mood expansion recipes
pub mod seeds;

/// Pool storage trait and in-memory implementation
pub mod store;

pub use builder::{build_default_pools, expand_pool, pad_pool};
pub use reverse_index::ReverseIndex;
pub use store::{MemoryPoolStore, PoolStore};
