// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training plan and the per-day schedule derived from it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Target progression for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdayTarget {
    /// Target in the first plan week (km)
    pub start_km: f64,
    /// Target once `weeks_cap` weeks have elapsed (km)
    pub end_km: f64,
    /// Weeks after which the target stops increasing
    pub weeks_cap: f64,
}

/// Fixed parameters of the training plan.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    /// Official first day of the plan
    pub plan_start: NaiveDate,
    /// Days shown before `plan_start`, all with a zero target
    pub lead_in_days: i64,
    /// Days after "now" covered by the schedule
    pub horizon_days: i64,
    /// Fraction of the cumulative target that counts as keeping pace
    pub done_ratio: f64,
}

impl Default for TrainingPlan {
    fn default() -> Self {
        Self {
            // 2016-05-30 is a Monday; the constant is always valid.
            plan_start: NaiveDate::from_ymd_opt(2016, 5, 30).unwrap_or_default(),
            lead_in_days: 7,
            horizon_days: 31 * 4 - 4,
            done_ratio: 0.9,
        }
    }
}

impl TrainingPlan {
    /// First day of the schedule window (start of the lead-in week).
    pub fn window_start(&self) -> NaiveDate {
        self.plan_start - chrono::Duration::days(self.lead_in_days)
    }

    /// Target progression for a day of the week, `None` on rest days.
    pub fn weekday_target(weekday: Weekday) -> Option<WeekdayTarget> {
        let (start_km, end_km, weeks_cap) = match weekday {
            Weekday::Tue | Weekday::Thu => (4.0, 7.0, 2.0),
            Weekday::Sat => (6.0, 10.0, 5.0),
            Weekday::Sun => (7.0, 25.0, 16.0),
            Weekday::Mon | Weekday::Wed | Weekday::Fri => return None,
        };
        Some(WeekdayTarget {
            start_km,
            end_km,
            weeks_cap,
        })
    }

    /// Weeks between `plan_start` and `date`, fractional.
    ///
    /// Not rounded to whole weeks: a Tuesday eight days in is 8/7 weeks
    /// (5.71 km), not week 1 (5.5 km).
    pub fn weeks_elapsed(&self, date: NaiveDate) -> f64 {
        (date - self.plan_start).num_days() as f64 / 7.0
    }

    /// Planned distance for a single day (km).
    pub fn target_for(&self, date: NaiveDate) -> f64 {
        if date < self.plan_start {
            return 0.0;
        }

        match Self::weekday_target(date.weekday()) {
            Some(t) => lerp(t.start_km, t.end_km, self.weeks_elapsed(date), t.weeks_cap),
            None => 0.0,
        }
    }
}

/// Linear interpolation from `start` to `end` as `progress` goes from 0 to
/// `progress_max`, holding at the ends outside that range.
pub fn lerp(start: f64, end: f64, progress: f64, progress_max: f64) -> f64 {
    let t = (progress / progress_max).clamp(0.0, 1.0);
    start + (end - start) * t
}

/// Display status of a schedule day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// No distance planned
    Rest,
    /// Cumulative distance keeps pace with the plan
    Done,
    /// In the past and behind plan
    Missed,
    /// Today or later and behind plan
    Upcoming,
}

/// One calendar day of the generated schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    /// Planned distance (km), 0 on rest days
    pub target_distance_km: f64,
    pub is_today: bool,
    pub is_past: bool,
    /// Total distance run exceeds `done_ratio` of the cumulative target through this day
    pub is_done: bool,
}

impl ScheduleDay {
    pub fn is_rest_day(&self) -> bool {
        self.target_distance_km == 0.0
    }

    pub fn status(&self) -> DayStatus {
        if self.is_rest_day() {
            DayStatus::Rest
        } else if self.is_done {
            DayStatus::Done
        } else if self.is_past {
            DayStatus::Missed
        } else {
            DayStatus::Upcoming
        }
    }
}
