// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod dashboard;

use crate::error::AppError;
use crate::middleware::add_security_headers;
use crate::AppState;
use axum::{http::Uri, middleware, Router};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Any path without a route.
async fn not_found(uri: Uri) -> AppError {
    tracing::info!(path = %uri.path(), "not found");
    AppError::NotFound
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(dashboard::routes())
        .fallback(not_found)
        .layer(middleware::from_fn(add_security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
