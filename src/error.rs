// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types and their HTTP responses.
//!
//! Responses are plain text: the dashboard is an HTML page, not a JSON API.

use crate::services::LogError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Render(String),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Render(msg) => {
                tracing::error!(error = %msg, "Template rendering failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Log(err) if err.is_fatal() => {
                tracing::error!(error = %err, "Run log contains data in an unexpected unit");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Log(err) => {
                tracing::error!(error = %err, "Run log is malformed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
