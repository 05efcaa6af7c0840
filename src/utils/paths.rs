use crate::error::ScoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the path of the only entry inside `dir`.
///
/// Every entry counts, including subdirectories and hidden files, so a stray
/// `.DS_Store` makes the directory ambiguous. Names are reported sorted.
pub fn single_file_in(dir: &Path) -> Result<PathBuf, ScoreError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    match names.len() {
        0 => Err(ScoreError::NoFileFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(dir.join(&names[0])),
        _ => Err(ScoreError::AmbiguousFile {
            dir: dir.to_path_buf(),
            names,
        }),
    }
}
