#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, ensure};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Points granted for an on-time submission.
pub const ON_TIME_POINTS: f64 = 20.0;
/// Points granted for a late submission.
pub const LATE_POINTS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Two-valued timeliness classification. There is no partial-credit curve.
pub enum SubmissionBand {
    /// Submitted at or before the deadline.
    OnTime,
    /// Submitted after the deadline.
    Late,
}

#[derive(Clone, Debug, Serialize)]
/// Result of banding a submission instant against the deadline.
pub struct SubmissionResult {
    /// When the submission was last modified.
    submitted_at: DateTime<Utc>,
    /// The deadline it was compared against.
    due_at:       DateTime<Utc>,
    /// The assigned band.
    band:         SubmissionBand,
    /// Points granted for the band.
    points:       f64,
    /// Human-readable explanation naming both instants.
    note:         String,
}

impl SubmissionResult {
    /// When the submission was last modified.
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// The deadline the submission was compared against.
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// The assigned band.
    pub fn band(&self) -> SubmissionBand {
        self.band
    }

    /// Points granted for the band.
    pub fn points(&self) -> f64 {
        self.points
    }

    /// Human-readable explanation naming both instants.
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Bands a submission instant against the deadline. Submitting exactly at
/// the deadline counts as on time.
pub fn evaluate(submitted_at: DateTime<Utc>, due_at: DateTime<Utc>) -> SubmissionResult {
    let stamp = |t: DateTime<Utc>| t.to_rfc3339_opts(SecondsFormat::Secs, true);

    if submitted_at <= due_at {
        SubmissionResult {
            submitted_at,
            due_at,
            band: SubmissionBand::OnTime,
            points: ON_TIME_POINTS,
            note: format!(
                "On time (submitted {} <= due {})",
                stamp(submitted_at),
                stamp(due_at)
            ),
        }
    } else {
        SubmissionResult {
            submitted_at,
            due_at,
            band: SubmissionBand::Late,
            points: LATE_POINTS,
            note: format!(
                "Late submission (submitted {} > due {})",
                stamp(submitted_at),
                stamp(due_at)
            ),
        }
    }
}

/// Narrow seam over the external source of the submission instant, so it
/// can be replaced with a deterministic fake in tests.
pub trait SubmissionClock {
    /// The instant this submission was last modified.
    fn submission_instant(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone)]
/// Reads the submission instant from the last commit of the repository at
/// `root`. Any failure substitutes the current wall-clock time, which
/// biases toward on-time; an accepted tradeoff that keeps the run alive.
pub struct GitClock {
    /// Repository root the log query runs in.
    root: PathBuf,
}

impl GitClock {
    /// Creates a clock reading from the repository at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SubmissionClock for GitClock {
    fn submission_instant(&self) -> DateTime<Utc> {
        match last_commit_instant(&self.root) {
            Ok(instant) => instant,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "could not read the last commit time; using the current time"
                );
                Utc::now()
            }
        }
    }
}

/// Runs `git log -1 --format=%ct` in `root` and converts the epoch answer.
fn last_commit_instant(root: &Path) -> Result<DateTime<Utc>> {
    let output = Command::new("git")
        .args(["log", "-1", "--format=%ct"])
        .current_dir(root)
        .output()
        .context("could not run git log")?;
    ensure!(output.status.success(), "git log exited with {}", output.status);

    let raw = String::from_utf8(output.stdout).context("git log output was not UTF-8")?;
    let secs: i64 = raw
        .trim()
        .parse()
        .context("could not parse the commit timestamp")?;

    Utc.timestamp_opt(secs, 0)
        .single()
        .context("commit timestamp out of range")
}
