// ABOUTME: MoodFood server binary: pools, nutrition resolution, and HTTP API
// ABOUTME: Loads env config, seeds the pools, and serves until shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # MoodFood API Server Binary
//!
//! Starts the mood-to-food HTTP API with deterministic default pools,
//! the nutrition provider chain, and curated health condition guidance.

use anyhow::{Context, Result};
use clap::Parser;
use moodfood_server::{
    config::environment::ServerConfig,
    logging,
    pools::{build_default_pools, MemoryPoolStore, ReverseIndex},
    providers::{EdamamProvider, NutritionProvider, UsdaProvider},
    resolver::NutritionResolver,
    routes::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "moodfood-server")]
#[command(about = "MoodFood API - mood-aware food suggestions and nutrition lookup")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting MoodFood API server");
    info!("{}", config.summary());

    // Build the default pools and derive the reverse index from them
    let pools = build_default_pools();
    let index = ReverseIndex::build(&pools);
    info!(
        pools = pools.len(),
        indexed_names = index.len(),
        "default pools built"
    );

    let store = Arc::new(MemoryPoolStore::seeded(pools));

    // Provider chain order is fixed: Edamam, then USDA, then the heuristic
    let providers: Vec<Arc<dyn NutritionProvider>> = vec![
        Arc::new(EdamamProvider::new(config.edamam.clone())),
        Arc::new(UsdaProvider::new(config.usda.clone())),
    ];
    let resolver = Arc::new(NutritionResolver::new(
        providers,
        index,
        config.cache_capacity,
    ));
    info!(
        edamam_configured = config.edamam.is_configured(),
        usda_configured = config.usda.is_configured(),
        "nutrition resolver ready"
    );

    let host = config.host.clone();
    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(store, resolver, config));
    let app = routes::router(resources);

    display_available_endpoints(&host, port);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    info!("Server listening on http://{host}:{port}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    } else {
        info!("Shutdown signal received");
    }
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    info!("Moods & Pools:");
    info!("   List Moods:        GET  http://{host}:{port}/api/moods");
    info!("   Get Pool:          GET  http://{host}:{port}/api/pools/{{mood}}");
    info!("   Suggestions:       GET  http://{host}:{port}/api/pools/{{mood}}/suggestions");
    info!("   Add Item:          POST http://{host}:{port}/api/pools/{{mood}}/items");
    info!("   Remove Item:       DELETE http://{host}:{port}/api/pools/{{mood}}/items/{{name}}");
    info!("Nutrition:");
    info!("   Lookup:            GET  http://{host}:{port}/api/nutrition?food={{name}}");
    info!("Health Conditions:");
    info!("   List Conditions:   GET  http://{host}:{port}/api/conditions");
    info!("   Get Guidance:      GET  http://{host}:{port}/api/conditions/{{condition}}");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
