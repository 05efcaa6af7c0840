mod fixtures;

pub use fixtures::{ScoringFixture, joined_rows};
