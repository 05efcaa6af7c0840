use crate::error::ScoreError;
use std::collections::BTreeSet;

/// Rejects a submission whose distinct predictions do not cover both classes.
///
/// A single-class submission is refused even when the reference has only
/// one class too. Values outside `{0, 1}` are not judged here; they fail
/// when the column is narrowed to labels.
pub fn validate_prediction_labels(distinct: &BTreeSet<i32>) -> Result<(), ScoreError> {
    if distinct.contains(&0) && distinct.contains(&1) {
        Ok(())
    } else {
        Err(ScoreError::InvalidLabelSet {
            found: distinct.clone(),
        })
    }
}
