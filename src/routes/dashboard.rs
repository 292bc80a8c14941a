// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard page.

use crate::error::{AppError, Result};
use crate::models::{DashboardView, Run};
use crate::templates;
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

/// Dashboard routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// Render the dashboard from a fresh read of the run log.
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    tracing::info!(path = "/", "index");

    let reader = state.log_reader.clone();
    let runs = tokio::task::spawn_blocking(move || reader.load_runs())
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Run log task failed: {}", e)))??;

    let total_distance_km = Run::total_distance_km(&runs);
    let schedule = state
        .schedule
        .build_schedule(&runs, total_distance_km, state.clock.now());
    let view = DashboardView::new(&runs, &schedule, state.config.goal_km);

    let html = state.templates.get_template(templates::INDEX)?.render(&view)?;
    Ok(Html(html))
}
