use crate::core::rows::{BinaryLabel, Subset};

/// One submitted prediction.
///
/// `key` is only populated when rows are joined on an explicit id column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub prediction: BinaryLabel,
    pub key: Option<String>,
}

/// One gold-label row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRow {
    pub label: BinaryLabel,
    pub subset: Subset,
    pub key: Option<String>,
}

/// A reference row with the prediction aligned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow {
    pub label: BinaryLabel,
    pub prediction: BinaryLabel,
    pub subset: Subset,
}

impl JoinedRow {
    pub fn new(reference: &ReferenceRow, submission: &SubmissionRow) -> Self {
        Self {
            label: reference.label,
            prediction: submission.prediction,
            subset: reference.subset.clone(),
        }
    }

    #[inline]
    pub fn is_correct(&self) -> bool {
        self.label == self.prediction
    }
}
