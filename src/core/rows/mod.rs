mod binary_label;
mod row;
mod subset;

pub use binary_label::BinaryLabel;
pub use row::{JoinedRow, ReferenceRow, SubmissionRow};
pub use subset::Subset;
