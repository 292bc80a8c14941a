// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Runmon dashboard server
//!
//! Serves a single page summarizing logged runs against a training plan.

use runmon::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        run_log = %config.run_log_path.display(),
        goal_km = config.goal_km,
        "Starting runmon"
    );

    // Compile templates once; they are shared read-only by all requests
    let state = Arc::new(AppState::new(config.clone())?);

    // A log holding distances in the wrong unit is corrupt: refuse to start
    match state.log_reader.load_runs() {
        Ok(runs) => tracing::info!(
            path = %state.log_reader.path().display(),
            count = runs.len(),
            "Run log checked"
        ),
        Err(e) if e.is_fatal() => {
            tracing::error!(error = %e, "Run log contains data in an unexpected unit");
            return Err(e.into());
        }
        Err(e) => tracing::warn!(error = %e, "Run log is malformed"),
    }

    // Build router
    let app = runmon::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    tracing::info!("All done");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("runmon=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
