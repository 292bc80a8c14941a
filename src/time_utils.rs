// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Source of "now" for schedule generation.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock time
    #[default]
    System,
    /// Always the given instant
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// Format a date as `dd.mm.yy`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d.%m.%y").to_string()
}

/// Format an elapsed time compactly, e.g. `28m30s` or `1h5m0s`.
pub fn format_elapsed(duration: Duration) -> String {
    let total = duration.num_seconds();
    if total == 0 {
        return "0s".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

/// Format a distance in kilometers with one decimal.
pub fn format_km(km: f64) -> String {
    format!("{:.1}", km)
}
