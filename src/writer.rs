//! Persists the rendered page as `<root>/index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IndexError, Result};
use crate::models::INDEX_FILE_NAME;

// Leading dot keeps the temp file out of any scan of the same root
const TEMP_FILE_NAME: &str = ".index.html.tmp";

/// Write `html` to `root/index.html`, replacing any existing file
///
/// The content is written to a hidden temp file next to the target and renamed into
/// place, so readers never observe a half-written page. No backup of the old file is kept.
///
/// # Errors
///
/// Returns [`IndexError::FilesystemWrite`] if the temp file cannot be written or renamed.
pub fn write_index(root: &Path, html: &str) -> Result<PathBuf> {
    let target = root.join(INDEX_FILE_NAME);
    let temp = root.join(TEMP_FILE_NAME);

    fs::write(&temp, html).map_err(|e| IndexError::write(&temp, e))?;
    if let Err(e) = fs::rename(&temp, &target) {
        // Best effort; the rename error is what matters
        let _ = fs::remove_file(&temp);
        return Err(IndexError::write(&target, e));
    }

    Ok(target)
}
