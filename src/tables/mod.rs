mod alignment;
mod reference;
mod submission;
mod subsets;
mod tsv_table;

pub use alignment::{Alignment, align};
pub use reference::{CORRECT_COLUMN, ReferenceTable, SUBSET_COLUMN};
pub use submission::{PREDICTION_COLUMN, SubmissionTable};
pub use subsets::{SubsetViews, split_subsets};
pub use tsv_table::TsvTable;
