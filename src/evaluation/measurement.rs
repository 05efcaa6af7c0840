use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The four scores reported per subset, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MetricKind {
    Precision,
    Recall,
    F1,
    Accuracy,
}

impl MetricKind {
    /// Label used inside the text reports, e.g. `Public F1`.
    pub fn report_label(self) -> &'static str {
        match self {
            MetricKind::Precision => "precision",
            MetricKind::Recall => "recall",
            MetricKind::F1 => "F1",
            MetricKind::Accuracy => "accuracy",
        }
    }
}

/// Summarized scalar metric produced by a performance evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub kind: MetricKind,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new(kind: MetricKind, value: f64) -> Self {
        Self { kind, value }
    }
}
