// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Runmon: a personal running-log dashboard.
//!
//! Reads completed runs from a CSV log, derives a day-by-day training
//! schedule from the distance run so far, and serves both as a single
//! HTML page.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod time_utils;

use config::Config;
use minijinja::Environment;
use models::TrainingPlan;
use services::{LogReader, ScheduleGenerator};
use time_utils::Clock;

/// Shared application state.
///
/// Immutable after startup; every request re-reads the log and rebuilds
/// the schedule.
pub struct AppState {
    pub config: Config,
    pub log_reader: LogReader,
    pub schedule: ScheduleGenerator,
    pub templates: Environment<'static>,
    pub clock: Clock,
}

impl AppState {
    /// Build state for the given configuration using the system clock.
    pub fn new(config: Config) -> Result<Self, minijinja::Error> {
        Ok(Self {
            log_reader: LogReader::new(&config.run_log_path),
            schedule: ScheduleGenerator::new(TrainingPlan::default()),
            templates: templates::environment()?,
            clock: Clock::System,
            config,
        })
    }
}
