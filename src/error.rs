use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a scoring run can fail.
///
/// All variants are fatal for the invocation; nothing is retried and no
/// report is written once one of them is raised.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("no files in {}", dir.display())]
    NoFileFound { dir: PathBuf },

    #[error("there should be exactly one file in {}: {}", dir.display(), names.join(" "))]
    AmbiguousFile { dir: PathBuf, names: Vec<String> },

    #[error("{column} column is not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}:{line}: {column} value {value:?} is not an integer", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("{}:{line}: {column} value {value} is not a binary label (expected 0 or 1)", path.display())]
    UnexpectedLabel {
        path: PathBuf,
        line: u64,
        column: String,
        value: i32,
    },

    #[error("predictions must contain both 0 and 1, found {found:?}")]
    InvalidLabelSet { found: BTreeSet<i32> },

    #[error("submission has {submission} rows but reference has {reference}")]
    RowCountMismatch { submission: usize, reference: usize },

    #[error("key {key:?} appears more than once in {}", path.display())]
    DuplicateKey { path: PathBuf, key: String },

    #[error("reference key {key:?} has no matching submission row")]
    UnmatchedKey { key: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_file_lists_every_name() {
        let err = ScoreError::AmbiguousFile {
            dir: PathBuf::from("in/ref"),
            names: vec!["a.tsv".into(), "b.tsv".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("in/ref"));
        assert!(msg.ends_with("a.tsv b.tsv"));
    }

    #[test]
    fn invalid_label_set_shows_found_values() {
        let err = ScoreError::InvalidLabelSet {
            found: BTreeSet::from([0]),
        };
        assert_eq!(
            err.to_string(),
            "predictions must contain both 0 and 1, found {0}"
        );
    }
}
