// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use runmon::config::Config;
use runmon::routes::create_router;
use runmon::time_utils::Clock;
use runmon::AppState;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Fixed "now" used by the HTTP tests: Wednesday 2016-06-15, noon UTC.
#[allow(dead_code)]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 6, 15, 12, 0, 0).unwrap()
}

/// Write a run log to a temporary file.
#[allow(dead_code)]
pub fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp log");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp log");
    file.flush().expect("Failed to flush temp log");
    file
}

/// Create a test app reading the given log with a fixed clock.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(log_path: &Path) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        run_log_path: log_path.to_path_buf(),
        ..Config::default()
    };

    let mut state = AppState::new(config).expect("Failed to compile templates");
    state.clock = Clock::Fixed(test_now());
    let state = Arc::new(state);

    (create_router(state.clone()), state)
}
