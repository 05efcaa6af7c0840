mod binary_classification_evaluator;

pub use binary_classification_evaluator::{BinaryClassificationEvaluator, evaluate};
