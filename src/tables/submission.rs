use crate::core::rows::SubmissionRow;
use crate::error::ScoreError;
use crate::tables::TsvTable;
use crate::validation::validate_prediction_labels;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const PREDICTION_COLUMN: &str = "prediction";

/// Parsed and validated submission predictions.
#[derive(Debug, Clone)]
pub struct SubmissionTable {
    path: PathBuf,
    rows: Vec<SubmissionRow>,
}

impl SubmissionTable {
    pub fn load(path: &Path, key_column: Option<&str>) -> Result<Self, ScoreError> {
        let table = TsvTable::read(path)?;
        Self::from_table(&table, key_column)
    }

    /// Checks every needed column exists, casts `prediction`, then validates
    /// the distinct prediction set before narrowing to labels.
    pub fn from_table(table: &TsvTable, key_column: Option<&str>) -> Result<Self, ScoreError> {
        let prediction_idx = table.column_index(PREDICTION_COLUMN)?;
        let key_idx = key_column.map(|c| table.column_index(c)).transpose()?;

        let raw = table.int_column(prediction_idx)?;
        let distinct: BTreeSet<i32> = raw.iter().copied().collect();
        validate_prediction_labels(&distinct)?;

        let predictions = table.binary_labels(prediction_idx, &raw)?;
        let rows = predictions
            .into_iter()
            .enumerate()
            .map(|(i, prediction)| SubmissionRow {
                prediction,
                key: key_idx.map(|k| table.cell(i, k).to_string()),
            })
            .collect();

        Ok(Self {
            path: table.path().to_path_buf(),
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[SubmissionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rows::BinaryLabel;

    fn load(text: &str, key: Option<&str>) -> Result<SubmissionTable, ScoreError> {
        let t = TsvTable::from_reader(Path::new("res/sub.tsv"), text.as_bytes()).unwrap();
        SubmissionTable::from_table(&t, key)
    }

    #[test]
    fn loads_predictions_in_order() {
        let s = load("prediction\n1\n0\n1.0\n", None).unwrap();
        let preds: Vec<_> = s.rows().iter().map(|r| r.prediction).collect();
        assert_eq!(
            preds,
            vec![BinaryLabel::Positive, BinaryLabel::Negative, BinaryLabel::Positive]
        );
        assert!(s.rows().iter().all(|r| r.key.is_none()));
    }

    #[test]
    fn missing_prediction_column_is_reported_before_any_cast() {
        let err = load("pred\nnot-a-number\n", None).unwrap_err();
        assert!(matches!(err, ScoreError::MissingColumn { ref column, .. } if column == "prediction"));
    }

    #[test]
    fn missing_key_column_is_reported() {
        let err = load("prediction\n1\n0\n", Some("id")).unwrap_err();
        assert!(matches!(err, ScoreError::MissingColumn { ref column, .. } if column == "id"));
    }

    #[test]
    fn all_zero_predictions_fail_validation() {
        let err = load("prediction\n0\n0\n0\n", None).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidLabelSet { .. }));
    }

    #[test]
    fn third_class_fails_with_line() {
        let err = load("prediction\n0\n1\n2\n", None).unwrap_err();
        assert!(matches!(err, ScoreError::UnexpectedLabel { line: 4, value: 2, .. }));
    }

    #[test]
    fn keys_are_captured_when_requested() {
        let s = load("id\tprediction\nx\t1\ny\t0\n", Some("id")).unwrap();
        let keys: Vec<_> = s.rows().iter().map(|r| r.key.clone().unwrap()).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }
}
