use crate::core::rows::JoinedRow;
use crate::error::ScoreError;
use crate::tables::{ReferenceTable, SubmissionTable};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// How submission rows are matched to reference rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Row `i` of the submission belongs to row `i` of the reference.
    #[default]
    Positional,
    /// Rows are matched on the named column, present in both files.
    ByKey(String),
}

impl Alignment {
    pub fn key_column(&self) -> Option<&str> {
        match self {
            Alignment::Positional => None,
            Alignment::ByKey(column) => Some(column.as_str()),
        }
    }
}

/// Attaches a prediction to every reference row, in reference order.
///
/// Row counts must match under either alignment.
pub fn align(
    reference: &ReferenceTable,
    submission: &SubmissionTable,
    alignment: &Alignment,
) -> Result<Vec<JoinedRow>, ScoreError> {
    if reference.len() != submission.len() {
        return Err(ScoreError::RowCountMismatch {
            submission: submission.len(),
            reference: reference.len(),
        });
    }

    match alignment {
        Alignment::Positional => Ok(reference
            .rows()
            .iter()
            .zip(submission.rows())
            .map(|(r, s)| JoinedRow::new(r, s))
            .collect()),
        Alignment::ByKey(_) => align_by_key(reference, submission),
    }
}

fn align_by_key(
    reference: &ReferenceTable,
    submission: &SubmissionTable,
) -> Result<Vec<JoinedRow>, ScoreError> {
    let by_key = index_keys(submission.path(), submission.rows().iter().map(|r| r.key.as_deref()))?;
    ensure_unique_keys(reference.path(), reference.rows().iter().map(|r| r.key.as_deref()))?;

    reference
        .rows()
        .iter()
        .map(|r| {
            let key = r.key.as_deref().unwrap_or_default();
            by_key
                .get(key)
                .map(|&i| JoinedRow::new(r, &submission.rows()[i]))
                .ok_or_else(|| ScoreError::UnmatchedKey {
                    key: key.to_string(),
                })
        })
        .collect()
}

fn index_keys<'a, I>(path: &Path, keys: I) -> Result<HashMap<&'a str, usize>, ScoreError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut map = HashMap::new();
    for (i, key) in keys.into_iter().enumerate() {
        let key = key.unwrap_or_default();
        if map.insert(key, i).is_some() {
            return Err(ScoreError::DuplicateKey {
                path: path.to_path_buf(),
                key: key.to_string(),
            });
        }
    }
    Ok(map)
}

fn ensure_unique_keys<'a, I>(path: &Path, keys: I) -> Result<(), ScoreError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = HashSet::new();
    for key in keys {
        let key = key.unwrap_or_default();
        if !seen.insert(key) {
            return Err(ScoreError::DuplicateKey {
                path: path.to_path_buf(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
