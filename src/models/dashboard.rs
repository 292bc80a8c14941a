// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dashboard page view model.

use crate::models::{DayStatus, Run, ScheduleDay};
use crate::time_utils::{format_elapsed, format_short_date};
use serde::Serialize;

/// Everything the dashboard template renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_distance_km: f64,
    pub goal_km: f64,
    /// Share of the goal covered so far (may exceed 100)
    pub progress_percent: f64,
    pub schedule: Vec<ScheduleCell>,
    /// Most recent run first
    pub runs: Vec<RunRow>,
}

/// One cell of the schedule grid.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleCell {
    /// Short weekday name ("Mon")
    pub weekday: String,
    /// ISO date
    pub date: String,
    pub target_km: f64,
    pub status: DayStatus,
    pub today: bool,
}

/// One row of the run history table.
#[derive(Debug, Clone, Serialize)]
pub struct RunRow {
    pub date: String,
    pub distance_km: f64,
    pub duration: String,
}

impl DashboardView {
    pub fn new(runs: &[Run], schedule: &[ScheduleDay], goal_km: f64) -> Self {
        let total_distance_km = Run::total_distance_km(runs);

        Self {
            total_distance_km,
            goal_km,
            progress_percent: total_distance_km / goal_km * 100.0,
            schedule: schedule.iter().map(ScheduleCell::from).collect(),
            runs: runs.iter().rev().map(RunRow::from).collect(),
        }
    }
}

impl From<&ScheduleDay> for ScheduleCell {
    fn from(day: &ScheduleDay) -> Self {
        Self {
            weekday: day.date.format("%a").to_string(),
            date: day.date.to_string(),
            target_km: day.target_distance_km,
            status: day.status(),
            today: day.is_today,
        }
    }
}

impl From<&Run> for RunRow {
    fn from(run: &Run) -> Self {
        Self {
            date: format_short_date(run.date),
            distance_km: run.distance_km,
            duration: format_elapsed(run.duration),
        }
    }
}
