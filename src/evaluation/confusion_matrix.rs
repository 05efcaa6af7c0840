use crate::core::rows::JoinedRow;
use crate::evaluation::{ScoreReport, f1_score};
use serde::Serialize;

/// Outcome counts with label 1 as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    pub fn_: u64,
    pub tn: u64,
}

impl ConfusionMatrix {
    /// Counts every row of a view in one pass.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a JoinedRow>,
    {
        let mut matrix = Self::default();
        for row in rows {
            matrix.add(row);
        }
        matrix
    }

    #[inline]
    pub fn add(&mut self, row: &JoinedRow) {
        match (row.prediction.is_positive(), row.label.is_positive()) {
            (true, true) => self.tp += 1,
            (true, false) => self.fp += 1,
            (false, true) => self.fn_ += 1,
            (false, false) => self.tn += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.fn_ + self.tn
    }

    /// TP / (TP + FP), `0.0` without predicted positives.
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// TP / (TP + FN), `0.0` without actual positives.
    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// (TP + TN) / total, `0.0` for an empty view.
    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total())
    }

    pub fn report(&self) -> ScoreReport {
        let precision = self.precision();
        let recall = self.recall();
        ScoreReport {
            precision,
            recall,
            f1: f1_score(precision, recall),
            accuracy: self.accuracy(),
            support: self.total(),
            confusion_matrix: *self,
        }
    }
}

#[inline]
fn ratio(num: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}
