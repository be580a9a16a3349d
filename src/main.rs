// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Signups API Server
//!
//! Serves the school activity directory and lets students sign up for
//! activities or drop out of them.

use activity_signups::{
    config::Config, db::ActivityStore, services::CatalogService, AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Activity Signups API");

    // Load the seed catalog
    match &config.activities_file {
        Some(path) => tracing::info!(path = %path.display(), "Loading activity catalog"),
        None => tracing::info!("Loading built-in activity catalog"),
    }
    let catalog = CatalogService::load(config.activities_file.as_deref())?;
    let activities = ActivityStore::new(catalog.into_activities());

    // Build shared state
    let state = Arc::new(AppState { config, activities });

    // Build router
    let app = activity_signups::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %addr,
        static_dir = %state.config.static_dir.display(),
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activity_signups=debug,info")),
        )
        .with(format)
        .init();
}
