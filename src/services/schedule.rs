// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training schedule generation.
//!
//! Produces one [`ScheduleDay`] per calendar day, from the start of the
//! lead-in week up to a rolling horizon after "now". Each day's target comes
//! from [`TrainingPlan::target_for`]; the done flag compares the total distance
//! run against the cumulative target through that day.

use crate::models::{Run, ScheduleDay, TrainingPlan};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Builds schedules for a fixed training plan.
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    plan: TrainingPlan,
}

impl ScheduleGenerator {
    pub fn new(plan: TrainingPlan) -> Self {
        Self { plan }
    }

    /// Last day of the window for a schedule generated at `now`.
    pub fn window_end(&self, now: DateTime<Utc>) -> NaiveDate {
        (now + Duration::days(self.plan.horizon_days)).date_naive()
    }

    /// Build the schedule in ascending date order.
    ///
    /// Only the aggregate `total_distance_km` affects the result; `runs` is
    /// accepted so callers hand over what they loaded.
    pub fn build_schedule(
        &self,
        runs: &[Run],
        total_distance_km: f64,
        now: DateTime<Utc>,
    ) -> Vec<ScheduleDay> {
        let start = self.plan.window_start();
        let end = self.window_end(now);
        let today_ordinal = now.ordinal();

        let mut schedule = Vec::new();
        let mut cumulative_target = 0.0;
        for day in start.iter_days().take_while(|d| *d <= end) {
            let target_distance_km = self.plan.target_for(day);
            cumulative_target += target_distance_km;

            let midnight = day.and_time(chrono::NaiveTime::MIN).and_utc();
            schedule.push(ScheduleDay {
                date: day,
                target_distance_km,
                // Same day-of-year, regardless of year.
                is_today: day.ordinal() == today_ordinal,
                is_past: now > midnight,
                is_done: total_distance_km > cumulative_target * self.plan.done_ratio,
            });
        }

        tracing::debug!(
            runs = runs.len(),
            total_distance_km,
            days = schedule.len(),
            "Built schedule"
        );
        schedule
    }
}
