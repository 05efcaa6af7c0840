use crate::core::rows::JoinedRow;
use crate::evaluation::{ConfusionMatrix, ScoreReport};

/// Accumulates joined rows and scores them with label 1 as the positive
/// class. Every ratio is derived from the confusion matrix; undefined ratios
/// are reported as `0.0`.
#[derive(Debug, Default, Clone)]
pub struct BinaryClassificationEvaluator {
    matrix: ConfusionMatrix,
}

impl BinaryClassificationEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, row: &JoinedRow) {
        self.matrix.add(row);
    }

    pub fn add_results<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a JoinedRow>,
    {
        for row in rows {
            self.add_result(row);
        }
    }

    pub fn report(&self) -> ScoreReport {
        self.matrix.report()
    }
}

/// Scores a view of joined rows in one pass.
pub fn evaluate<'a, I>(rows: I) -> ScoreReport
where
    I: IntoIterator<Item = &'a JoinedRow>,
{
    let mut evaluator = BinaryClassificationEvaluator::new();
    evaluator.add_results(rows);
    evaluator.report()
}
