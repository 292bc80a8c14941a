// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run log loading and parsing.
//!
//! The log is a headerless CSV file with one run per record:
//! `<id>,<M/D/YYYY>,<distance> mile,<MM:SS>`. The first column is ignored.

use crate::models::run::{Run, KM_PER_MILE};
use chrono::{Duration, NaiveDate};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Unit suffix every distance field must carry.
const MILE_SUFFIX: &str = " mile";

/// Number of fields a record must have.
const FIELDS_PER_RECORD: usize = 4;

/// Reads runs from the log file on each call.
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all runs in file order.
    ///
    /// A missing or unreadable file yields no runs. Any malformed record
    /// fails the whole load.
    pub fn load_runs(&self) -> Result<Vec<Run>, LogError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Run log not readable, treating as empty"
                );
                return Ok(Vec::new());
            }
        };

        let runs = parse_runs(file)?;
        tracing::debug!(path = %self.path.display(), count = runs.len(), "Loaded runs");
        Ok(runs)
    }
}

/// Parse every record from a CSV byte source.
pub fn parse_runs<R: io::Read>(source: R) -> Result<Vec<Run>, LogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut runs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = record?;
        runs.push(parse_record(line, &record)?);
    }
    Ok(runs)
}

fn parse_record(line: usize, record: &csv::StringRecord) -> Result<Run, LogError> {
    if record.len() < FIELDS_PER_RECORD {
        return Err(LogError::MissingField {
            line,
            found: record.len(),
        });
    }

    Ok(Run {
        date: parse_date(line, &record[1])?,
        distance_km: parse_distance_km(line, &record[2])?,
        duration: parse_duration(line, &record[3])?,
    })
}

/// Parse a `M/D/YYYY` date. The year must have exactly four digits.
pub fn parse_date(line: usize, value: &str) -> Result<NaiveDate, LogError> {
    let invalid = || LogError::InvalidDate {
        line,
        value: value.to_string(),
    };

    let value = value.trim();
    let year = value.rsplit('/').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%m/%d/%Y").map_err(|_| invalid())
}

/// Parse a `<float> mile` distance and convert it to kilometers.
pub fn parse_distance_km(line: usize, value: &str) -> Result<f64, LogError> {
    if !value.contains(MILE_SUFFIX) {
        return Err(LogError::WrongUnit {
            line,
            value: value.to_string(),
        });
    }

    let miles: f64 = value
        .replacen(MILE_SUFFIX, "", 1)
        .trim()
        .parse()
        .map_err(|_| LogError::InvalidDistance {
            line,
            value: value.to_string(),
        })?;

    if !miles.is_finite() || miles < 0.0 {
        return Err(LogError::InvalidDistance {
            line,
            value: value.to_string(),
        });
    }

    Ok(miles * KM_PER_MILE)
}

/// Parse a `minutes:seconds` duration, read as `<minutes>m<seconds>s`.
///
/// Seconds may be fractional and may exceed 59 (`28:75` is 29m15s).
pub fn parse_duration(line: usize, value: &str) -> Result<Duration, LogError> {
    let invalid = || LogError::InvalidDuration {
        line,
        value: value.to_string(),
    };

    let (minutes, seconds) = value.trim().split_once(':').ok_or_else(invalid)?;
    if !is_unsigned_decimal(minutes, false) || !is_unsigned_decimal(seconds, true) {
        return Err(invalid());
    }

    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: f64 = seconds.parse().map_err(|_| invalid())?;
    let nanos = (seconds * 1e9).round();
    if !nanos.is_finite() || nanos > i64::MAX as f64 {
        return Err(invalid());
    }

    Duration::try_minutes(minutes)
        .and_then(|m| m.checked_add(&Duration::nanoseconds(nanos as i64)))
        .ok_or_else(invalid)
}

/// Digits with an optional single decimal point; no sign, exponent or colon.
fn is_unsigned_decimal(value: &str, allow_fraction: bool) -> bool {
    let mut digits = 0;
    let mut points = 0;
    for b in value.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if allow_fraction => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Errors from loading the run log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Wrong unit in record {line}: {value:?} (expected miles)")]
    WrongUnit { line: usize, value: String },

    #[error("Record {line} has {found} fields, expected at least 4")]
    MissingField { line: usize, found: usize },

    #[error("Invalid date in record {line}: {value:?}")]
    InvalidDate { line: usize, value: String },

    #[error("Invalid distance in record {line}: {value:?}")]
    InvalidDistance { line: usize, value: String },

    #[error("Invalid duration in record {line}: {value:?}")]
    InvalidDuration { line: usize, value: String },

    #[error("Failed to read run log: {0}")]
    Csv(#[from] csv::Error),
}

impl LogError {
    /// Whether the log holds data in a unit it cannot be trusted to convert.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LogError::WrongUnit { .. })
    }
}
