//! Enumeration of the template tree.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Lists every path under `root`, the root itself first.
///
/// Directories are yielded before their contents and siblings are sorted by
/// file name, so the order only depends on the state of the filesystem.
/// Symbolic links are listed but not followed.
///
/// # Errors
/// * `Error::TraversalError` if `root` or any directory below it cannot be read
pub fn list_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for dir_entry in WalkDir::new(root).sort_by_file_name() {
        let entry = dir_entry.map_err(|source| Error::TraversalError {
            root: root.display().to_string(),
            source,
        })?;
        files.push(entry.into_path());
    }

    debug!("Found {} template entries under {}", files.len(), root.display());
    Ok(files)
}
