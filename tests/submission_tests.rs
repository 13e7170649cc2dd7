use chrono::{DateTime, Duration, TimeZone, Utc};
use tally::{
    config::{self, Config},
    grade::{
        GitClock, LATE_POINTS, ON_TIME_POINTS, SubmissionBand, SubmissionClock, submission,
    },
};

fn due() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap()
}

#[test]
fn submitting_exactly_at_the_deadline_is_on_time() {
    let result = submission::evaluate(due(), due());

    assert_eq!(result.band(), SubmissionBand::OnTime);
    assert_eq!(result.points(), ON_TIME_POINTS);
}

#[test]
fn submitting_one_second_past_the_deadline_is_late() {
    let result = submission::evaluate(due() + Duration::seconds(1), due());

    assert_eq!(result.band(), SubmissionBand::Late);
    assert_eq!(result.points(), LATE_POINTS);
}

#[test]
fn notes_name_both_instants() {
    let early = submission::evaluate(due() - Duration::days(3), due());
    assert!(early.note().starts_with("On time"));
    assert!(early.note().contains("2026-02-26T23:59:59Z"));
    assert!(early.note().contains("2026-03-01T23:59:59Z"));

    let late = submission::evaluate(due() + Duration::hours(2), due());
    assert!(late.note().starts_with("Late submission"));
}

struct FixedClock(DateTime<Utc>);

impl SubmissionClock for FixedClock {
    fn submission_instant(&self) -> DateTime<Utc> {
        self.0
    }
}

#[test]
fn the_clock_seam_accepts_a_deterministic_fake() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Config::new(due(), "reports");
    let clock = FixedClock(due() - Duration::days(1));

    let report = tally::grade_submission(dir.path(), &config, &clock);

    assert_eq!(report.submission().band(), SubmissionBand::OnTime);
    assert_eq!(report.submission().submitted_at(), due() - Duration::days(1));
}

#[test]
fn git_clock_substitutes_the_current_time_outside_a_repository() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let clock = GitClock::new(dir.path());

    let before = Utc::now() - Duration::seconds(5);
    let instant = clock.submission_instant();
    let after = Utc::now() + Duration::seconds(5);

    assert!(instant >= before && instant <= after);
}

#[test]
fn supplied_deadlines_parse_and_bad_ones_fall_back() {
    let parsed = config::resolve_due_date(Some("2026-03-01T23:59:59Z"));
    assert_eq!(parsed, due());

    let fallback = config::resolve_due_date(Some("next tuesday"));
    assert_eq!(fallback, config::default_due_date());

    let missing = config::resolve_due_date(None);
    assert_eq!(missing, config::default_due_date());
}
