mod confusion_matrix;
mod evaluators;
mod measurement;
mod score_report;

pub use confusion_matrix::ConfusionMatrix;
pub use evaluators::{BinaryClassificationEvaluator, evaluate};
pub use measurement::{Measurement, MetricKind};
pub use score_report::{ScoreReport, f1_score};
