pub mod report;
pub mod types;

pub use report::{
    CoOccurrence, CohortReport, DomainAggregate, ProblemRank, SkipReason, SkippedSubmission,
    Trend, TrendDirection, HEADLINE_PROBLEMS,
};
pub use types::{Submission, SubmissionStatus};
