#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    artifacts::ArtifactSet,
    grade::results::{CategoryResult, CheckOutcome, Grade, fmt_points, round2},
    rubric::{Category, Rubric},
};

/// Fraction of the possible total granted as a minimum once any weighted
/// check passes anywhere.
pub const ATTEMPT_FLOOR_RATIO: f64 = 0.6;

#[derive(Clone, Debug)]
/// Aggregate tasks score across all categories, after the attempt-floor and
/// zero-floor rules.
pub struct TasksScore {
    /// Sum of category points before any policy adjustment.
    raw_score:   f64,
    /// Sum of category maximums.
    possible:    f64,
    /// Tasks score after the policy.
    final_score: f64,
    /// Explanation of the adjustment, when one was applied.
    note:        Option<String>,
}

impl TasksScore {
    /// Sum of category points before any policy adjustment.
    pub fn raw_score(&self) -> f64 {
        self.raw_score
    }

    /// Sum of category maximums.
    pub fn possible(&self) -> f64 {
        self.possible
    }

    /// Tasks score after the policy.
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Explanation of the adjustment, when one was applied.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Evaluates every check in `category` and aggregates weights into points.
///
/// `points = max_points * achieved_weight / total_weight`, rounded to two
/// decimals; a total weight of zero is replaced by one, so a category made
/// only of informational checks scores zero by construction.
pub fn evaluate_category(category: &Category, artifacts: &ArtifactSet) -> CategoryResult {
    let outcomes: Vec<CheckOutcome> = category
        .checks()
        .iter()
        .map(|check| CheckOutcome {
            id:          check.id().to_string(),
            description: check.description().to_string(),
            weight:      check.weight(),
            passed:      check.passes(artifacts),
            hint:        check.hint(),
            subject:     check.subject(),
        })
        .collect();

    let achieved: f64 = outcomes
        .iter()
        .filter(|o| o.passed)
        .map(|o| o.weight)
        .sum();
    let declared: f64 = outcomes.iter().map(|o| o.weight).sum();
    let total = if declared == 0.0 { 1.0 } else { declared };
    let points = round2(category.max_points() * achieved / total);

    CategoryResult::new(
        category.name().to_string(),
        Grade::new(points, category.max_points()),
        achieved,
        total,
        outcomes,
    )
}

/// Evaluates the whole rubric and applies the cross-category policy.
pub fn evaluate(rubric: &Rubric, artifacts: &ArtifactSet) -> (Vec<CategoryResult>, TasksScore) {
    let categories: Vec<CategoryResult> = rubric
        .categories()
        .iter()
        .map(|c| evaluate_category(c, artifacts))
        .collect();

    let (raw_score, possible) = categories
        .iter()
        .fold((0f64, 0f64), |acc, r| (acc.0 + r.points(), acc.1 + r.max_points()));

    (categories, apply_floors(raw_score, possible))
}

/// Applies the attempt-floor and zero-floor rules to the raw aggregate.
///
/// A raw score of zero stays exactly zero: informational zero-weight passes
/// never move the raw score, so they cannot lift a submission off the zero
/// floor on their own. Any positive raw score below the floor is raised to
/// exactly the floor value.
pub fn apply_floors(raw_score: f64, possible: f64) -> TasksScore {
    let floor = round2(ATTEMPT_FLOOR_RATIO * possible);

    if raw_score <= 0.0 {
        TasksScore {
            raw_score,
            possible,
            final_score: 0.0,
            note: Some("No weighted check passed; the tasks score is 0.".to_string()),
        }
    } else if raw_score < floor {
        TasksScore {
            raw_score,
            possible,
            final_score: floor,
            note: Some(format!(
                "Partial attempt detected; tasks score raised to the {} minimum.",
                fmt_points(floor)
            )),
        }
    } else {
        TasksScore {
            raw_score,
            possible,
            final_score: raw_score,
            note: None,
        }
    }
}
