// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod log_reader;
pub mod schedule;

pub use log_reader::{LogError, LogReader};
pub use schedule::ScheduleGenerator;
