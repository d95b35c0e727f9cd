// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init, stub providers, and server resource builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `moodfood_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use moodfood_server::{
    config::environment::ServerConfig,
    models::{NutritionRecord, NutritionSource},
    pools::{build_default_pools, MemoryPoolStore, PoolStore, ReverseIndex},
    providers::{NutritionProvider, ProviderFailure},
    resolver::NutritionResolver,
    routes::ServerResources,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider stub that always succeeds with a fixed record
pub struct StaticProvider {
    name: &'static str,
    record: NutritionRecord,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn new(name: &'static str, record: NutritionRecord) -> Self {
        Self {
            name,
            record,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NutritionProvider for StaticProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _food: &str) -> Result<NutritionRecord, ProviderFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.record.clone())
    }
}

/// Provider stub that always fails with a fixed reason
pub struct FailingProvider {
    name: &'static str,
    reason: &'static str,
}

impl FailingProvider {
    pub fn new(name: &'static str, reason: &'static str) -> Self {
        Self { name, reason }
    }
}

#[async_trait]
impl NutritionProvider for FailingProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _food: &str) -> Result<NutritionRecord, ProviderFailure> {
        Err(ProviderFailure::NotConfigured(self.reason.to_owned()))
    }
}

/// A record stub attributed to an external source
pub fn usda_record() -> NutritionRecord {
    NutritionRecord {
        calories: 250,
        protein_g: 9.5,
        vitamins: "Vitamin C, Iron, Fe".into(),
        source: NutritionSource::Usda,
    }
}

/// A record stub attributed to Edamam
pub fn edamam_record() -> NutritionRecord {
    NutritionRecord {
        calories: 420,
        protein_g: 12.0,
        vitamins: "Vitamin B6, Vitamin C".into(),
        source: NutritionSource::Edamam,
    }
}

/// Resolver over the given providers with the default pools' reverse index
pub fn create_test_resolver(providers: Vec<Arc<dyn NutritionProvider>>) -> NutritionResolver {
    init_test_logging();
    let index = ReverseIndex::build(&build_default_pools());
    NutritionResolver::new(providers, index, 16)
}

/// Server resources seeded with the default pools and no live providers
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    let pools = build_default_pools();
    let index = ReverseIndex::build(&pools);
    let store: Arc<dyn PoolStore> = Arc::new(MemoryPoolStore::seeded(pools));
    let resolver = Arc::new(NutritionResolver::new(Vec::new(), index, 16));
    Arc::new(ServerResources::new(
        store,
        resolver,
        ServerConfig::for_testing(),
    ))
}

/// Server resources whose store is completely empty
pub fn create_empty_pool_resources() -> Arc<ServerResources> {
    init_test_logging();
    let index = ReverseIndex::build(&build_default_pools());
    let store: Arc<dyn PoolStore> = Arc::new(MemoryPoolStore::empty());
    let resolver = Arc::new(NutritionResolver::new(Vec::new(), index, 16));
    Arc::new(ServerResources::new(
        store,
        resolver,
        ServerConfig::for_testing(),
    ))
}
