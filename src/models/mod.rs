// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod dashboard;
pub mod run;
pub mod schedule;

pub use dashboard::DashboardView;
pub use run::Run;
pub use schedule::{DayStatus, ScheduleDay, TrainingPlan, WeekdayTarget};
