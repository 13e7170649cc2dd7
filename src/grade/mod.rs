#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Weighted aggregation and the cross-category floor policy.
pub mod policy;
/// Report assembly and delivery.
pub mod report;
/// Shared grade result types.
pub mod results;
/// Submission timeliness banding.
pub mod submission;

pub use policy::{ATTEMPT_FLOOR_RATIO, TasksScore, apply_floors, evaluate, evaluate_category};
pub use report::{
    Delivered, GradeDocument, Report, ReportError, deliver, emit_summary, feedback_text,
    grade_document, show_overview,
};
pub use results::{CategoryResult, CheckOutcome, Grade};
pub use submission::{
    GitClock, LATE_POINTS, ON_TIME_POINTS, SubmissionBand, SubmissionClock, SubmissionResult,
};
