use crate::core::rows::{ReferenceRow, Subset};
use crate::error::ScoreError;
use crate::tables::TsvTable;
use std::path::{Path, PathBuf};

pub const CORRECT_COLUMN: &str = "correct";
pub const SUBSET_COLUMN: &str = "subset";

/// Gold labels with their public/private tags.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    path: PathBuf,
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    pub fn load(path: &Path, key_column: Option<&str>) -> Result<Self, ScoreError> {
        let table = TsvTable::read(path)?;
        Self::from_table(&table, key_column)
    }

    pub fn from_table(table: &TsvTable, key_column: Option<&str>) -> Result<Self, ScoreError> {
        let correct_idx = table.column_index(CORRECT_COLUMN)?;
        let subset_idx = table.column_index(SUBSET_COLUMN)?;
        let key_idx = key_column.map(|c| table.column_index(c)).transpose()?;

        let raw = table.int_column(correct_idx)?;
        let labels = table.binary_labels(correct_idx, &raw)?;

        let rows = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| ReferenceRow {
                label,
                subset: Subset::parse(table.cell(i, subset_idx)),
                key: key_idx.map(|k| table.cell(i, k).to_string()),
            })
            .collect();

        Ok(Self {
            path: table.path().to_path_buf(),
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
