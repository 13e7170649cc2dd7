#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::{
    artifacts::ArtifactStatus,
    grade::{
        policy::TasksScore,
        results::{CategoryResult, CheckOutcome, fmt_points},
        submission::{ON_TIME_POINTS, SubmissionBand, SubmissionResult},
    },
};

/// File name of the human-readable feedback report.
pub const FEEDBACK_FILE: &str = "feedback.txt";
/// File name of the structured result document.
pub const GRADE_FILE: &str = "grade.json";

#[derive(Clone, Debug, TypedBuilder)]
#[builder(doc)]
/// Everything a single grading run produced, recomputed fresh every run.
pub struct Report {
    /// Root of the graded submission.
    root:       PathBuf,
    /// Presence snapshot of every expected artifact, in fixed order.
    artifacts:  Vec<ArtifactStatus>,
    /// Scored categories in declared order.
    categories: Vec<CategoryResult>,
    /// Aggregate tasks score after the policy.
    tasks:      TasksScore,
    /// Timeliness banding of the submission.
    submission: SubmissionResult,
}

impl Report {
    /// Root of the graded submission.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Presence snapshot of every expected artifact.
    pub fn artifacts(&self) -> &[ArtifactStatus] {
        &self.artifacts
    }

    /// Scored categories in declared order.
    pub fn categories(&self) -> &[CategoryResult] {
        &self.categories
    }

    /// Aggregate tasks score after the policy.
    pub fn tasks(&self) -> &TasksScore {
        &self.tasks
    }

    /// Timeliness banding of the submission.
    pub fn submission(&self) -> &SubmissionResult {
        &self.submission
    }

    /// Tasks score plus submission points.
    pub fn final_score(&self) -> f64 {
        self.tasks.final_score() + self.submission.points()
    }

    /// Maximum reachable score: tasks possible plus on-time points.
    pub fn possible_total(&self) -> f64 {
        self.tasks.possible() + ON_TIME_POINTS
    }

    /// Whether an artifact's content was loaded, by logical name.
    fn artifact_present(&self, logical_name: &str) -> bool {
        self.artifacts
            .iter()
            .any(|s| s.logical_name() == logical_name && s.present())
    }
}

/// Failure to deliver a report artifact. The only condition a grading run
/// surfaces as an operational error; a low score never is one.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The report directory could not be created.
    #[error("could not create report directory `{path}`")]
    CreateDir {
        /// Directory that could not be created.
        path:   PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A report file could not be written.
    #[error("could not write `{path}`")]
    WriteFile {
        /// File that could not be written.
        path:   PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug)]
/// Paths of the delivered report files.
pub struct Delivered {
    /// Path the feedback report was written to.
    feedback_path: PathBuf,
    /// Path the structured result document was written to.
    grade_path:    PathBuf,
}

impl Delivered {
    /// Path the feedback report was written to.
    pub fn feedback_path(&self) -> &Path {
        &self.feedback_path
    }

    /// Path the structured result document was written to.
    pub fn grade_path(&self) -> &Path {
        &self.grade_path
    }
}

#[derive(Serialize, Debug)]
/// Structured result document mirroring the feedback report for machine
/// consumption. Field order is the serialization order.
pub struct GradeDocument {
    /// Final score: tasks after policy plus submission points.
    score:             f64,
    /// Tasks score after the policy.
    tasks_score:       f64,
    /// Sum of category points before the policy.
    raw_tasks_score:   f64,
    /// Sum of category maximums.
    tasks_possible:    f64,
    /// Explanation of the policy adjustment, when one was applied.
    policy_note:       Option<String>,
    /// Points granted for the submission band.
    submission_points: f64,
    /// The assigned submission band.
    submission_band:   SubmissionBand,
    /// Human-readable explanation naming both instants.
    submission_note:   String,
    /// Per-category breakdown with full per-check detail.
    categories:        Vec<CategoryDocument>,
    /// Presence snapshot of every expected artifact.
    artifacts:         Vec<ArtifactStatus>,
}

#[derive(Serialize, Debug)]
/// Per-category slice of the structured result document.
pub struct CategoryDocument {
    /// Display name of the category.
    name:       String,
    /// Points earned in the category.
    points:     f64,
    /// The category's maximum points.
    max_points: f64,
    /// Per-check outcomes in declared order.
    checks:     Vec<CheckOutcome>,
}

/// Builds the structured result document for a report.
pub fn grade_document(report: &Report) -> GradeDocument {
    GradeDocument {
        score:             report.final_score(),
        tasks_score:       report.tasks().final_score(),
        raw_tasks_score:   report.tasks().raw_score(),
        tasks_possible:    report.tasks().possible(),
        policy_note:       report.tasks().note().map(str::to_string),
        submission_points: report.submission().points(),
        submission_band:   report.submission().band(),
        submission_note:   report.submission().note().to_string(),
        categories:        report
            .categories()
            .iter()
            .map(|c| CategoryDocument {
                name:       c.name().to_string(),
                points:     c.points(),
                max_points: c.max_points(),
                checks:     c.outcomes().to_vec(),
            })
            .collect(),
        artifacts:         report.artifacts().to_vec(),
    }
}

/// Renders the deterministic feedback report: summary scores, per-check
/// detail, then actionable suggestions for whatever failed.
pub fn feedback_text(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("AUTOGRADER FEEDBACK REPORT".to_string());
    lines.push("=========================".to_string());
    lines.push(String::new());
    lines.push(format!("Checked submission root: {}", report.root().display()));
    lines.push(String::new());

    lines.push("SUMMARY SCORES".to_string());
    lines.push("--------------".to_string());
    for category in report.categories() {
        lines.push(format!(
            "{}: {}/{}",
            category.name(),
            fmt_points(category.points()),
            fmt_points(category.max_points())
        ));
    }
    lines.push(String::new());

    let tasks = report.tasks();
    lines.push(format!(
        "Raw tasks score: {}/{}",
        fmt_points(tasks.raw_score()),
        fmt_points(tasks.possible())
    ));
    lines.push(format!(
        "Tasks score after policy: {}/{}",
        fmt_points(tasks.final_score()),
        fmt_points(tasks.possible())
    ));
    if let Some(note) = tasks.note() {
        lines.push(format!("Policy note: {note}"));
    }
    lines.push(format!(
        "Submission points: {}/{}",
        fmt_points(report.submission().points()),
        fmt_points(ON_TIME_POINTS)
    ));
    lines.push(format!("Submission note: {}", report.submission().note()));
    lines.push(String::new());

    lines.push(format!(
        "FINAL SCORE: {}/{}",
        fmt_points(report.final_score()),
        fmt_points(report.possible_total())
    ));
    lines.push(String::new());

    lines.push("DETAILED CHECKS".to_string());
    lines.push("---------------".to_string());
    for category in report.categories() {
        lines.push(String::new());
        lines.push(format!(
            "{} ({} pts)",
            category.name(),
            fmt_points(category.max_points())
        ));
        lines.push(
            category
                .outcomes()
                .iter()
                .map(|o| {
                    let status = if o.passed { "PASS" } else { "FAIL" };
                    format!(" - [{status}] {} ({} pts)", o.description, fmt_points(o.weight))
                })
                .join("\n"),
        );
    }

    lines.push(String::new());
    lines.push("ACTIONABLE FEEDBACK / SUGGESTIONS".to_string());
    lines.push("--------------------------------".to_string());
    lines.extend(suggestions(report));

    if tasks.raw_score() <= 0.0 {
        lines.push(String::new());
        lines.push(
            "NOTE: The grader detected no implementation of any task. If you implemented code \
             in other files or used different filenames, place them at the expected paths and \
             re-run."
                .to_string(),
        );
    }

    lines.join("\n")
}

/// Collects the suggestion lines in fixed order: one distinct line per
/// missing or unreadable artifact, then one hint per failing hinted check
/// whose artifact was actually readable. Passing checks never produce a
/// hint.
fn suggestions(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();

    for status in report.artifacts() {
        if status.present() {
            continue;
        }
        if status.exists() {
            lines.push(format!(
                "- Unreadable file: {}. The grader found it but could not read it as text.",
                status.rel_path()
            ));
        } else {
            lines.push(format!(
                "- Missing file: {}. The grader couldn't locate it.",
                status.rel_path()
            ));
        }
    }

    for category in report.categories() {
        for outcome in category.outcomes() {
            if outcome.passed || !report.artifact_present(outcome.subject) {
                continue;
            }
            if let Some(hint) = outcome.hint {
                lines.push(format!("- {hint}"));
            }
        }
    }

    lines
}

/// Prints the grading overview table to stderr.
pub fn show_overview(report: &Report) {
    eprintln!(
        "{}",
        Table::new(report.categories())
            .with(Panel::header("Grading Overview"))
            .with(Panel::footer(format!(
                "Tasks: {:.2}/{:.2} | Final: {:.2}/{:.2}",
                report.tasks().final_score(),
                report.tasks().possible(),
                report.final_score(),
                report.possible_total()
            )))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(36).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );
}

/// Writes both report files under `report_dir`, overwriting previous runs.
/// This is the delivery step; failure here is an operational error.
pub fn deliver(report: &Report, report_dir: &Path) -> Result<Delivered, ReportError> {
    std::fs::create_dir_all(report_dir).map_err(|source| ReportError::CreateDir {
        path: report_dir.to_path_buf(),
        source,
    })?;

    let feedback_path = report_dir.join(FEEDBACK_FILE);
    std::fs::write(&feedback_path, feedback_text(report)).map_err(|source| {
        ReportError::WriteFile {
            path: feedback_path.clone(),
            source,
        }
    })?;

    let grade_path = report_dir.join(GRADE_FILE);
    let document = serde_json::to_string_pretty(&grade_document(report))
        .expect("grade document serializes");
    std::fs::write(&grade_path, document).map_err(|source| ReportError::WriteFile {
        path: grade_path.clone(),
        source,
    })?;

    Ok(Delivered {
        feedback_path,
        grade_path,
    })
}

/// Emits the machine summary (`score=` and `feedback=` lines appended to
/// the file named by `GITHUB_OUTPUT`, when set) and the stdout summary for
/// the human caller. Summary emission never fails the run.
pub fn emit_summary(report: &Report, delivered: &Delivered) {
    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let entry = format!(
            "score={}\nfeedback={}\n",
            fmt_points(report.final_score()),
            delivered.feedback_path().display()
        );
        if let Err(e) = append_line(Path::new(&path), &entry) {
            tracing::warn!(error = %e, "could not append the run summary to GITHUB_OUTPUT");
        }
    }

    let band = match report.submission().band() {
        SubmissionBand::OnTime => "on time".green(),
        SubmissionBand::Late => "late".yellow(),
    };
    println!(
        "Final Score: {}",
        format!(
            "{}/{}",
            fmt_points(report.final_score()),
            fmt_points(report.possible_total())
        )
        .bold()
    );
    println!("Submission: {band}");
    println!("Feedback written to: {}", delivered.feedback_path().display());
    println!("Grade JSON written to: {}", delivered.grade_path().display());
}

/// Appends `entry` to the file at `path`, creating it if needed.
fn append_line(path: &Path, entry: &str) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(entry.as_bytes())
}
