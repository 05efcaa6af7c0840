pub mod core;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod tables;
pub mod tasks;
pub mod utils;
pub mod validation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::ScoreError;
