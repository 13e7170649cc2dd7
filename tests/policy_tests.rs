use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use tally::{
    artifacts::ArtifactSet,
    grade::{self, Report, apply_floors, evaluate, evaluate_category},
    rubric::{Category, Check, Rubric},
};

fn passing(_: &ArtifactSet) -> bool {
    true
}

fn failing(_: &ArtifactSet) -> bool {
    false
}

fn check(id: &'static str, weight: f64, pass: bool) -> Check {
    Check::builder()
        .id(id)
        .description("synthetic check")
        .weight(weight)
        .subject("app")
        .predicate(if pass { passing } else { failing })
        .build()
}

fn category(name: &'static str, max_points: f64, checks: Vec<Check>) -> Category {
    Category::builder()
        .name(name)
        .max_points(max_points)
        .checks(checks)
        .build()
}

#[test]
fn category_points_stay_within_bounds() {
    let cat = category(
        "mixed",
        30.0,
        vec![
            check("a", 5.0, true),
            check("b", 7.0, false),
            check("c", 3.0, true),
        ],
    );
    let result = evaluate_category(&cat, &ArtifactSet::absent());

    assert!(result.achieved_weight() >= 0.0);
    assert!(result.achieved_weight() <= result.total_weight());
    assert!(result.points() >= 0.0);
    assert!(result.points() <= result.max_points());
    assert_eq!(result.achieved_weight(), 8.0);
    assert_eq!(result.total_weight(), 15.0);
    assert_eq!(result.points(), 16.0);
}

#[test]
fn all_informational_category_scores_zero() {
    let cat = category(
        "informational",
        10.0,
        vec![check("a", 0.0, true), check("b", 0.0, true)],
    );
    let result = evaluate_category(&cat, &ArtifactSet::absent());

    // total weight of zero is replaced by one, so the quotient stays defined
    assert_eq!(result.total_weight(), 1.0);
    assert_eq!(result.points(), 0.0);
}

#[test]
fn points_round_to_two_decimals() {
    let cat = category(
        "thirds",
        20.0,
        vec![
            check("a", 1.0, true),
            check("b", 1.0, false),
            check("c", 1.0, false),
        ],
    );
    let result = evaluate_category(&cat, &ArtifactSet::absent());

    assert_eq!(result.points(), 6.67);
}

#[test]
fn zero_floor_ignores_informational_passes() {
    let rubric = Rubric::new(vec![
        category("one", 30.0, vec![check("a", 5.0, false), check("b", 0.0, true)]),
        category("two", 20.0, vec![check("c", 4.0, false)]),
    ]);
    let (categories, tasks) = evaluate(&rubric, &ArtifactSet::absent());

    let informational = &categories[0].outcomes()[1];
    assert!(informational.passed);
    assert_eq!(informational.weight, 0.0);

    assert_eq!(tasks.raw_score(), 0.0);
    assert_eq!(tasks.final_score(), 0.0);
    assert!(tasks.note().is_some());
}

#[test]
fn attempt_floor_raises_partial_work_exactly() {
    // one fully passing category out of 30/20/30: raw 30 of 80 possible
    let rubric = Rubric::new(vec![
        category("one", 30.0, vec![check("a", 5.0, true)]),
        category("two", 20.0, vec![check("b", 4.0, false)]),
        category("three", 30.0, vec![check("c", 6.0, false)]),
    ]);
    let (_, tasks) = evaluate(&rubric, &ArtifactSet::absent());

    assert_eq!(tasks.raw_score(), 30.0);
    assert_eq!(tasks.possible(), 80.0);
    assert_eq!(tasks.final_score(), 48.0);
    assert!(tasks.note().is_some());
}

#[test]
fn single_weighted_pass_still_triggers_the_floor() {
    let rubric = Rubric::new(vec![
        category("one", 30.0, vec![check("a", 1.0, true), check("b", 9.0, false)]),
        category("two", 50.0, vec![check("c", 4.0, false)]),
    ]);
    let (_, tasks) = evaluate(&rubric, &ArtifactSet::absent());

    assert!(tasks.raw_score() > 0.0);
    assert!(tasks.raw_score() < 48.0);
    assert_eq!(tasks.final_score(), 48.0);
}

#[test]
fn scores_at_or_above_the_floor_pass_through() {
    let at_floor = apply_floors(48.0, 80.0);
    assert_eq!(at_floor.final_score(), 48.0);
    assert!(at_floor.note().is_none());

    let above = apply_floors(60.5, 80.0);
    assert_eq!(above.final_score(), 60.5);
    assert!(above.note().is_none());

    let full = apply_floors(80.0, 80.0);
    assert_eq!(full.final_score(), 80.0);
    assert!(full.note().is_none());
}

#[test]
fn worked_example_lands_on_sixty_eight() {
    let rubric = Rubric::new(vec![
        category("one", 30.0, vec![check("a", 5.0, true)]),
        category("two", 20.0, vec![check("b", 4.0, false)]),
        category("three", 30.0, vec![check("c", 6.0, false)]),
    ]);
    let artifacts = ArtifactSet::absent();
    let (categories, tasks) = evaluate(&rubric, &artifacts);

    let due = Utc.with_ymd_and_hms(2026, 1, 15, 23, 59, 59).unwrap();
    let submitted = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
    let submission = grade::submission::evaluate(submitted, due);

    let report = Report::builder()
        .root(PathBuf::from("."))
        .artifacts(artifacts.statuses())
        .categories(categories)
        .tasks(tasks)
        .submission(submission)
        .build();

    assert_eq!(report.final_score(), 68.0);
    assert_eq!(report.possible_total(), 100.0);
}
