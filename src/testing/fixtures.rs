use crate::core::rows::{BinaryLabel, JoinedRow, Subset};
use crate::tasks::{REFERENCE_DIR, SUBMISSION_DIR};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Throwaway input directory laid out as `res/` + `ref/`, with an `out/`
/// path next to it that is not created up front.
pub struct ScoringFixture {
    root: TempDir,
}

impl ScoringFixture {
    pub fn empty() -> Self {
        let root = TempDir::new().expect("create temp dir");
        fs::create_dir_all(root.path().join("input").join(SUBMISSION_DIR)).expect("create res");
        fs::create_dir_all(root.path().join("input").join(REFERENCE_DIR)).expect("create ref");
        Self { root }
    }

    pub fn new(submission: &str, reference: &str) -> Self {
        let fx = Self::empty();
        fx.write_submission("submission.tsv", submission);
        fx.write_reference("reference.tsv", reference);
        fx
    }

    pub fn write_submission(&self, name: &str, contents: &str) {
        fs::write(self.input_dir().join(SUBMISSION_DIR).join(name), contents)
            .expect("write submission");
    }

    pub fn write_reference(&self, name: &str, contents: &str) {
        fs::write(self.input_dir().join(REFERENCE_DIR).join(name), contents)
            .expect("write reference");
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.path().join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }
}

/// Builds joined rows from parallel 0/1 vectors and subset tags.
pub fn joined_rows(labels: &[i32], predictions: &[i32], subsets: &[&str]) -> Vec<JoinedRow> {
    assert_eq!(labels.len(), predictions.len());
    assert_eq!(labels.len(), subsets.len());
    labels
        .iter()
        .zip(predictions)
        .zip(subsets)
        .map(|((&y, &yhat), &s)| JoinedRow {
            label: BinaryLabel::try_from(y).expect("binary label"),
            prediction: BinaryLabel::try_from(yhat).expect("binary prediction"),
            subset: Subset::parse(s),
        })
        .collect()
}
