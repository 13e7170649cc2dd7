#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The declarative web-lab rubric.
pub mod lab;
/// Named predicate functions evaluated against the artifact set.
pub mod predicates;

use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::artifacts::ArtifactSet;

/// A pure pass/fail test over the loaded artifact set.
///
/// Predicates are total: given an absent artifact they evaluate to `false`,
/// they never panic, and they never mutate anything. This keeps evaluation
/// order irrelevant for correctness.
pub type Predicate = fn(&ArtifactSet) -> bool;

#[derive(Clone, TypedBuilder)]
#[builder(doc)]
/// A single weighted pass/fail rubric item evaluated against artifact text.
pub struct Check {
    /// Identifier, unique within the rubric.
    id:          &'static str,
    /// What the check looks for, as shown to the student.
    description: &'static str,
    /// Non-negative weight. Zero-weight checks are informational: reported,
    /// but contributing no score.
    weight:      f64,
    /// Logical name of the artifact this check primarily reads. Drives the
    /// missing-file wording in feedback.
    subject:     &'static str,
    /// The predicate deciding pass or fail.
    predicate:   Predicate,
    /// Actionable remediation shown when the check fails and its subject
    /// artifact is present.
    #[builder(default, setter(strip_option))]
    hint:        Option<&'static str>,
}

impl Check {
    /// Identifier, unique within the rubric.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// What the check looks for.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The check's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Logical name of the artifact this check primarily reads.
    pub fn subject(&self) -> &'static str {
        self.subject
    }

    /// Remediation hint, if the check carries one.
    pub fn hint(&self) -> Option<&'static str> {
        self.hint
    }

    /// Runs the predicate against the artifact set.
    pub fn passes(&self, artifacts: &ArtifactSet) -> bool {
        (self.predicate)(artifacts)
    }
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .field("subject", &self.subject)
            .finish()
    }
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
/// A named group of checks with its own maximum point budget.
pub struct Category {
    /// Display name of the category.
    name:       &'static str,
    /// Checks in declared order. The order fixes report ordering only;
    /// evaluation does not depend on it.
    checks:     Vec<Check>,
    /// Points this category is worth when every weighted check passes.
    max_points: f64,
}

impl Category {
    /// Display name of the category.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Checks in declared order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Points this category is worth.
    pub fn max_points(&self) -> f64 {
        self.max_points
    }
}

#[derive(Debug, Clone)]
/// The full ordered rubric: an immutable table of categories built once at
/// startup.
pub struct Rubric {
    /// Categories in declared order.
    categories: Vec<Category>,
}

impl Rubric {
    /// Builds a rubric from categories in declared order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Categories in declared order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Sum of every category's maximum points.
    pub fn possible(&self) -> f64 {
        self.categories.iter().map(Category::max_points).sum()
    }

    /// A serialisable description of the rubric, for inspection tooling.
    pub fn describe(&self) -> RubricInfo {
        RubricInfo {
            possible:   self.possible(),
            categories: self
                .categories
                .iter()
                .map(|c| CategoryInfo {
                    name:       c.name(),
                    max_points: c.max_points(),
                    checks:     c
                        .checks()
                        .iter()
                        .map(|k| CheckInfo {
                            id:          k.id(),
                            description: k.description(),
                            weight:      k.weight(),
                            subject:     k.subject(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Serialisable view of the rubric.
pub struct RubricInfo {
    /// Sum of every category's maximum points.
    pub possible:   f64,
    /// Categories in declared order.
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize)]
/// Serialisable view of one category.
pub struct CategoryInfo {
    /// Display name of the category.
    pub name:       &'static str,
    /// Points the category is worth.
    pub max_points: f64,
    /// Checks in declared order.
    pub checks:     Vec<CheckInfo>,
}

#[derive(Debug, Clone, Serialize)]
/// Serialisable view of one check.
pub struct CheckInfo {
    /// Identifier, unique within the rubric.
    pub id:          &'static str,
    /// What the check looks for.
    pub description: &'static str,
    /// The check's weight.
    pub weight:      f64,
    /// Logical name of the artifact the check primarily reads.
    pub subject:     &'static str,
}
