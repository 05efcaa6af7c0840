use crate::error::ScoreError;
use crate::evaluation::{ScoreReport, evaluate};
use crate::report::{ReportPaths, ReportWriter};
use crate::tables::{Alignment, ReferenceTable, SubmissionTable, align, split_subsets};
use crate::utils::paths::single_file_in;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const SUBMISSION_DIR: &str = "res";
pub const REFERENCE_DIR: &str = "ref";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub alignment: Alignment,
}

impl ScoringConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_dir: I, output_dir: O) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            alignment: Alignment::default(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn submission_dir(&self) -> PathBuf {
        self.input_dir.join(SUBMISSION_DIR)
    }

    pub fn reference_dir(&self) -> PathBuf {
        self.input_dir.join(REFERENCE_DIR)
    }
}

/// Scores of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub public: ScoreReport,
    pub private: ScoreReport,
    /// Rows tagged neither `public` nor `private`.
    pub dropped_rows: usize,
    pub reports: ReportPaths,
}

/// One-shot pipeline: resolve inputs, load and align tables, score the public
/// and private views, then write both reports.
///
/// Reports are only written after every earlier stage succeeded.
pub struct SubmissionScoring {
    config: ScoringConfig,
}

impl SubmissionScoring {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<ScoringOutcome, ScoreError> {
        let submission_path = single_file_in(&self.config.submission_dir())?;
        let reference_path = single_file_in(&self.config.reference_dir())?;
        debug!(submission = %submission_path.display(), reference = %reference_path.display(), "resolved inputs");

        let key_column = self.config.alignment.key_column();
        let submission = SubmissionTable::load(&submission_path, key_column)?;
        let reference = ReferenceTable::load(&reference_path, key_column)?;
        info!(
            submission_rows = submission.len(),
            reference_rows = reference.len(),
            "loaded tables"
        );

        let joined = align(&reference, &submission, &self.config.alignment)?;
        let views = split_subsets(&joined);
        if views.dropped > 0 {
            warn!(rows = views.dropped, "rows outside public/private subsets ignored");
        }
        warn_if_empty("public", views.public.len());
        warn_if_empty("private", views.private.len());

        let public = evaluate(views.public);
        let private = evaluate(views.private);
        info!(?public, ?private, "scored submission");

        let reports = ReportWriter::new(&self.config.output_dir).write(&public, &private)?;

        Ok(ScoringOutcome {
            public,
            private,
            dropped_rows: views.dropped,
            reports,
        })
    }
}

fn warn_if_empty(subset: &str, rows: usize) {
    if rows == 0 {
        warn!(subset, "subset has no rows; its scores are reported as 0.0");
    }
}

/// Convenience wrapper around [`SubmissionScoring::run`].
pub fn score_submission(input_dir: &Path, output_dir: &Path) -> Result<ScoringOutcome, ScoreError> {
    SubmissionScoring::new(ScoringConfig::new(input_dir, output_dir)).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ALL_SCORES_FILE, PUBLIC_SCORES_FILE};
    use crate::testing::ScoringFixture;
    use std::fs;

    const REFERENCE: &str = "correct\tsubset\n1\tpublic\n0\tpublic\n1\tprivate\n0\tprivate\n";
    const SUBMISSION: &str = "prediction\n1\n1\n1\n0\n";

    #[test]
    fn end_to_end_four_rows() {
        let fx = ScoringFixture::new(SUBMISSION, REFERENCE);
        let out = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap();

        assert_eq!(out.public.precision, 0.5);
        assert_eq!(out.public.recall, 1.0);
        assert!((out.public.f1 - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(out.public.accuracy, 0.5);
        assert_eq!(
            (out.private.precision, out.private.recall, out.private.f1, out.private.accuracy),
            (1.0, 1.0, 1.0, 1.0)
        );

        let public = fs::read_to_string(fx.output_dir().join(PUBLIC_SCORES_FILE)).unwrap();
        assert_eq!(
            public,
            "Public test\n\tPublic precision: 0.5\n\tPublic recall: 1.0\n\tPublic F1: 0.6666666666666666\n\tPublic accuracy: 0.5\n"
        );
        let all = fs::read_to_string(fx.output_dir().join(ALL_SCORES_FILE)).unwrap();
        assert!(all.starts_with(&public));
        assert!(all.ends_with(
            "Private test\n\tPrivate precision: 1.0\n\tPrivate recall: 1.0\n\tPrivate F1: 1.0\n\tPrivate accuracy: 1.0\n"
        ));
    }

    #[test]
    fn rerun_produces_identical_reports() {
        let fx = ScoringFixture::new(SUBMISSION, REFERENCE);
        score_submission(&fx.input_dir(), &fx.output_dir()).unwrap();
        let first = fs::read(fx.output_dir().join(ALL_SCORES_FILE)).unwrap();
        score_submission(&fx.input_dir(), &fx.output_dir()).unwrap();
        let second = fs::read(fx.output_dir().join(ALL_SCORES_FILE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn untagged_rows_reach_neither_section() {
        let reference = "correct\tsubset\n1\tpublic\n0\tpublic\n1\tprivate\n0\tprivate\n1\tdev\n";
        let submission = "prediction\n1\n0\n1\n0\n0\n";
        let fx = ScoringFixture::new(submission, reference);

        let out = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap();
        assert_eq!(out.dropped_rows, 1);
        assert_eq!(out.public.support, 2);
        assert_eq!(out.private.support, 2);
        assert_eq!(out.private.recall, 1.0);
        assert_eq!(out.public.accuracy, 1.0);
    }

    #[test]
    fn empty_submission_dir_is_no_file_found() {
        let fx = ScoringFixture::empty();
        fx.write_reference("ref.tsv", REFERENCE);

        let err = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap_err();
        assert!(matches!(err, ScoreError::NoFileFound { .. }));
        assert!(!fx.output_dir().join(PUBLIC_SCORES_FILE).exists());
    }

    #[test]
    fn two_reference_files_are_ambiguous() {
        let fx = ScoringFixture::new(SUBMISSION, REFERENCE);
        fx.write_reference("extra.tsv", REFERENCE);

        let err = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap_err();
        assert!(matches!(err, ScoreError::AmbiguousFile { ref names, .. } if names.len() == 2));
    }

    #[test]
    fn single_class_submission_writes_nothing() {
        let reference = "correct\tsubset\n0\tpublic\n0\tprivate\n";
        let fx = ScoringFixture::new("prediction\n0\n0\n", reference);

        let err = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidLabelSet { .. }));
        assert!(!fx.output_dir().join(ALL_SCORES_FILE).exists());
    }

    #[test]
    fn short_submission_is_rejected() {
        let fx = ScoringFixture::new("prediction\n1\n0\n", REFERENCE);
        let err = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap_err();
        assert!(matches!(err, ScoreError::RowCountMismatch { submission: 2, reference: 4 }));
    }

    #[test]
    fn key_alignment_reorders_submission() {
        let reference = "id\tcorrect\tsubset\na\t1\tpublic\nb\t0\tpublic\nc\t1\tprivate\nd\t0\tprivate\n";
        let submission = "id\tprediction\nd\t0\nc\t1\nb\t1\na\t1\n";
        let fx = ScoringFixture::new(submission, reference);

        let config = ScoringConfig::new(fx.input_dir(), fx.output_dir())
            .with_alignment(Alignment::ByKey("id".into()));
        let out = SubmissionScoring::new(config).run().unwrap();
        assert_eq!(out.public.precision, 0.5);
        assert_eq!(out.private.accuracy, 1.0);
    }

    #[test]
    fn boolean_gold_labels_score_like_integers() {
        let reference = "correct\tsubset\nTrue\tpublic\nFalse\tpublic\nTrue\tprivate\nFalse\tprivate\n";
        let fx = ScoringFixture::new(SUBMISSION, reference);

        let out = score_submission(&fx.input_dir(), &fx.output_dir()).unwrap();
        assert_eq!(out.public.precision, 0.5);
        assert_eq!(out.public.confusion_matrix.fp, 1);
        assert_eq!(out.private.accuracy, 1.0);
    }
}
