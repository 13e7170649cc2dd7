#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Formats a point value without trailing zeros, so `30.00` prints as `30`
/// and `22.50` as `22.5`. Keeps report text stable across runs.
pub(crate) fn fmt_points(x: f64) -> String {
    let s = format!("{x:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize)]
/// An earned/possible point pair.
pub struct Grade {
    /// Points actually earned.
    pub earned: f64,
    /// Maximum points possible.
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `earned` - the points actually earned
    /// * `out_of` - the maximum points possible
    pub fn new(earned: f64, out_of: f64) -> Self {
        Self { earned, out_of }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/{:.2}", self.earned, self.out_of)
    }
}

#[derive(Clone, Debug, Serialize)]
/// Outcome of a single rubric check, carried into both output documents.
pub struct CheckOutcome {
    /// Check identifier.
    pub id:          String,
    /// What the check looked for.
    pub description: String,
    /// The check's weight.
    pub weight:      f64,
    /// Whether the predicate passed.
    pub passed:      bool,
    /// Remediation hint for the failing case, if the check carries one.
    #[serde(skip)]
    pub(crate) hint:    Option<&'static str>,
    /// Logical name of the artifact the check reads.
    #[serde(skip)]
    pub(crate) subject: &'static str,
}

#[derive(Tabled, Clone, Debug)]
/// Scored result for one rubric category, displayable as an overview row.
pub struct CategoryResult {
    #[tabled(rename = "Category")]
    /// * `name`: the category's display name
    name:            String,
    #[tabled(rename = "Score")]
    /// * `score`: points earned against the category budget
    score:           Grade,
    #[tabled(rename = "Checks passed")]
    /// * `passed_summary`: passing checks over total checks
    passed_summary:  String,
    #[tabled(skip)]
    /// * `achieved_weight`: sum of weights of passing checks
    achieved_weight: f64,
    #[tabled(skip)]
    /// * `total_weight`: sum of all weights (1 substituted when zero)
    total_weight:    f64,
    #[tabled(skip)]
    /// * `outcomes`: per-check outcomes in declared order
    outcomes:        Vec<CheckOutcome>,
}

impl CategoryResult {
    /// Assembles a category result from its parts.
    pub(crate) fn new(
        name: String,
        score: Grade,
        achieved_weight: f64,
        total_weight: f64,
        outcomes: Vec<CheckOutcome>,
    ) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            name,
            score,
            passed_summary: format!("{passed}/{}", outcomes.len()),
            achieved_weight,
            total_weight,
            outcomes,
        }
    }

    /// The category's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points earned in this category.
    pub fn points(&self) -> f64 {
        self.score.earned
    }

    /// The category's maximum points.
    pub fn max_points(&self) -> f64 {
        self.score.out_of
    }

    /// Sum of weights of passing checks.
    pub fn achieved_weight(&self) -> f64 {
        self.achieved_weight
    }

    /// Sum of all weights, with 1 substituted when the true sum is zero.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Per-check outcomes in declared order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }
}
