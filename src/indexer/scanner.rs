use std::fs;
use std::io;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::indexer::naming::display_name;
use crate::indexer::ordering::sort_entries;
use crate::models::{DirectoryEntry, INDEX_FILE_NAME, IndexConfig};

/// Scan the immediate children of `root` for directories that contain an `index.html`
///
/// A child qualifies when its name does not start with `.`, it is a directory (symlinks
/// are followed), and it holds a file named exactly `index.html`. Qualifying children
/// are named and sorted according to `config`.
///
/// # Returns
///
/// The ordered entries, possibly empty. Children that fail the checks are skipped
/// silently; that is filtering, not an error.
///
/// # Errors
///
/// Returns [`IndexError::FilesystemRead`] if:
/// - `root` cannot be listed
/// - A directory entry cannot be read or stat'ed
///
/// Dangling symlinks are treated as non-directories rather than errors. Children whose
/// names are not valid UTF-8 cannot be linked from the page and are skipped with a warning.
pub fn scan_directory(root: &Path, config: &IndexConfig) -> Result<Vec<DirectoryEntry>> {
    let entries = fs::read_dir(root).map_err(|e| IndexError::read(root, e))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IndexError::read(root, e))?;
        let child = entry.path();

        let file_name = entry.file_name();

        // Hidden entries, which also covers .git and CI metadata
        if file_name.as_encoded_bytes().starts_with(b".") {
            continue;
        }

        let raw_name = match file_name.into_string() {
            Ok(name) => name,
            Err(name) => {
                eprintln!("Warning: Skipping entry with non UTF-8 name: {:?}", name);
                continue;
            }
        };

        if !is_directory(&child)? {
            continue;
        }

        if !has_marker_file(&child)? {
            continue;
        }

        found.push(DirectoryEntry::new(display_name(&raw_name, config.naming), raw_name));
    }

    sort_entries(&mut found, config.ordering);
    Ok(found)
}

fn is_directory(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(IndexError::read(path, e)),
    }
}

fn has_marker_file(dir: &Path) -> Result<bool> {
    let marker = dir.join(INDEX_FILE_NAME);
    match fs::metadata(&marker) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(IndexError::read(marker, e)),
    }
}
