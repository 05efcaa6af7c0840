use crate::evaluation::{ConfusionMatrix, Measurement, MetricKind};
use serde::Serialize;

/// Precision, recall, F1 and accuracy over one view of joined rows.
///
/// Undefined ratios are stored as `0.0`; `support` tells an empty view apart
/// from a genuinely zero score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreReport {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub support: u64,
    pub confusion_matrix: ConfusionMatrix,
}

impl ScoreReport {
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Precision => self.precision,
            MetricKind::Recall => self.recall,
            MetricKind::F1 => self.f1,
            MetricKind::Accuracy => self.accuracy,
        }
    }

    /// The four scores in report order.
    pub fn measurements(&self) -> Vec<Measurement> {
        use strum::IntoEnumIterator;
        MetricKind::iter()
            .map(|kind| Measurement::new(kind, self.get(kind)))
            .collect()
    }
}

/// Harmonic mean of precision and recall; `0.0` when both are zero.
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    let s = precision + recall;
    if s > 0.0 {
        2.0 * precision * recall / s
    } else {
        0.0
    }
}
