//! # tally
//!
//! A pattern-based autograder for the user-management dashboard web lab.
//! It loads a fixed set of submitted files as text, evaluates a rubric of
//! weighted substring and pattern checks against them, applies the
//! attempt-floor/zero-floor scoring policy and the submission timeliness
//! band, and writes a feedback report plus a structured result document.
//!
//! The engine never parses or runs the submitted code; every check is a
//! pure textual predicate, and every scoring outcome (including zero) is a
//! normal result, not an error.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Loading submitted files into memory as read-only text
pub mod artifacts;
/// Environment-derived settings with documented fallbacks
pub mod config;
/// For all things related to grading
pub mod grade;
/// The declarative rubric evaluated against the submission
pub mod rubric;

use std::path::Path;

use artifacts::ArtifactSet;
use config::Config;
use grade::{Report, SubmissionClock};

/// Grades the submission at `root`: loads the artifacts, evaluates the
/// rubric, bands the submission instant against the configured deadline,
/// and assembles the report.
///
/// This never fails: missing files load as absent, and the clock and
/// deadline carry their own fallbacks. Delivery of the report files is the
/// caller's step and the only one that can error.
pub fn grade_submission(root: &Path, config: &Config, clock: &dyn SubmissionClock) -> Report {
    let artifacts = ArtifactSet::load(root);
    let rubric = rubric::lab::web_lab();
    let (categories, tasks) = grade::policy::evaluate(&rubric, &artifacts);
    let submission = grade::submission::evaluate(clock.submission_instant(), config.due_date());

    Report::builder()
        .root(root.to_path_buf())
        .artifacts(artifacts.statuses())
        .categories(categories)
        .tasks(tasks)
        .submission(submission)
        .build()
}
