mod submission_scoring;

pub use submission_scoring::{
    REFERENCE_DIR, SUBMISSION_DIR, ScoringConfig, ScoringOutcome, SubmissionScoring,
    score_submission,
};
