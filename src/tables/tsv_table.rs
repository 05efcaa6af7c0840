use crate::core::rows::BinaryLabel;
use crate::error::ScoreError;
use crate::utils::file_parsing::parse_integer_cell;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A tab-separated table with a header row, kept in file order.
///
/// Cells stay as strings; typed access goes through [`int_column`] and
/// friends, which report the 1-based source line of a bad cell.
#[derive(Debug, Clone)]
pub struct TsvTable {
    path: PathBuf,
    headers: Vec<String>,
    records: Vec<StringRecord>,
    lines: Vec<u64>,
}

impl TsvTable {
    pub fn read(path: &Path) -> Result<Self, ScoreError> {
        let file = File::open(path)?;
        Self::from_reader(path, file)
    }

    pub fn from_reader<R: Read>(path: &Path, reader: R) -> Result<Self, ScoreError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        let mut lines = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            lines.push(record.position().map_or(i as u64 + 2, |p| p.line()));
            records.push(record);
        }

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            records,
            lines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of `name` among the headers.
    pub fn column_index(&self, name: &str) -> Result<usize, ScoreError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ScoreError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.records[row].get(column).unwrap_or("")
    }

    pub fn line_of(&self, row: usize) -> u64 {
        self.lines[row]
    }

    pub fn int_column(&self, column: usize) -> Result<Vec<i32>, ScoreError> {
        (0..self.len())
            .map(|row| {
                let cell = self.cell(row, column);
                parse_integer_cell(cell).ok_or_else(|| ScoreError::InvalidValue {
                    path: self.path.clone(),
                    line: self.line_of(row),
                    column: self.headers[column].clone(),
                    value: cell.to_string(),
                })
            })
            .collect()
    }

    /// Narrows already-parsed integers of `column` to 0/1 labels.
    pub fn binary_labels(
        &self,
        column: usize,
        values: &[i32],
    ) -> Result<Vec<BinaryLabel>, ScoreError> {
        values
            .iter()
            .enumerate()
            .map(|(row, &v)| {
                BinaryLabel::try_from(v).map_err(|value| ScoreError::UnexpectedLabel {
                    path: self.path.clone(),
                    line: self.line_of(row),
                    column: self.headers[column].clone(),
                    value,
                })
            })
            .collect()
    }
}
