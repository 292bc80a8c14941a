// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 9090;
const DEFAULT_RUN_LOG_PATH: &str = "tracks.csv";
const DEFAULT_GOAL_KM: f64 = 365.0;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// CSV run log, re-read on every request
    pub run_log_path: PathBuf,
    /// Cumulative distance goal for the progress bar (km)
    pub goal_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            run_log_path: PathBuf::from(DEFAULT_RUN_LOG_PATH),
            goal_km: DEFAULT_GOAL_KM,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unparseable values fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let goal_km = env::var("GOAL_KM")
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(DEFAULT_GOAL_KM);
        if !goal_km.is_finite() || goal_km <= 0.0 {
            return Err(ConfigError::Invalid("GOAL_KM", goal_km.to_string()));
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            run_log_path: env::var("RUN_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RUN_LOG_PATH)),
            goal_km,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
