#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Deadline applied when no environment deadline is supplied or the
/// supplied one cannot be parsed. Instructors should set `DUE_DATE`.
pub const DEFAULT_DUE_DATE: &str = "2025-12-31T23:59:59Z";

/// Environment variable naming the deadline as an ISO 8601 instant.
pub const DUE_DATE_ENV: &str = "DUE_DATE";

/// CI-action alias for the deadline variable.
pub const DUE_DATE_INPUT_ENV: &str = "INPUT_DUE_DATE";

/// Environment variable overriding the report directory.
pub const REPORT_DIR_ENV: &str = "TALLY_REPORT_DIR";

/// Report directory used when no override is supplied, relative to the
/// submission root.
pub const DEFAULT_REPORT_DIR: &str = "reports";

#[derive(Debug, Clone)]
/// Resolved runtime settings for a grading run.
pub struct Config {
    /// The deadline submissions are banded against.
    due_date:   DateTime<Utc>,
    /// Directory both report files are written to.
    report_dir: PathBuf,
}

impl Config {
    /// Builds settings from the environment, applying documented defaults
    /// for anything absent or unparsable.
    pub fn from_env() -> Self {
        let raw = std::env::var(DUE_DATE_ENV)
            .or_else(|_| std::env::var(DUE_DATE_INPUT_ENV))
            .ok();
        let report_dir = std::env::var(REPORT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_DIR));

        Self {
            due_date: resolve_due_date(raw.as_deref()),
            report_dir,
        }
    }

    /// Builds settings from explicit values.
    pub fn new(due_date: DateTime<Utc>, report_dir: impl Into<PathBuf>) -> Self {
        Self {
            due_date,
            report_dir: report_dir.into(),
        }
    }

    /// The deadline submissions are banded against.
    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Directory both report files are written to.
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }
}

/// Parses a supplied deadline, falling back to the documented default when
/// it is absent or unparsable. Never fails the run.
pub fn resolve_due_date(raw: Option<&str>) -> DateTime<Utc> {
    match raw {
        Some(value) => match DateTime::parse_from_rfc3339(value.trim()) {
            Ok(instant) => instant.with_timezone(&Utc),
            Err(e) => {
                tracing::warn!(
                    value,
                    error = %e,
                    "could not parse the supplied deadline; using the default"
                );
                default_due_date()
            }
        },
        None => default_due_date(),
    }
}

/// The documented fallback deadline as an instant.
pub fn default_due_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(DEFAULT_DUE_DATE)
        .expect("default deadline literal parses")
        .with_timezone(&Utc)
}
