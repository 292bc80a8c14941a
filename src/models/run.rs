// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged run model.

use chrono::{Duration, NaiveDate};

/// Kilometers per statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// One completed run, parsed from a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Calendar day of the run (no time of day)
    pub date: NaiveDate,
    /// Distance normalized to kilometers (never negative)
    pub distance_km: f64,
    /// Elapsed time
    pub duration: Duration,
}

impl Run {
    /// Sum of the distances of all runs, in kilometers.
    pub fn total_distance_km(runs: &[Run]) -> f64 {
        runs.iter().map(|r| r.distance_km).sum()
    }
}
