//! Scan, render and write in one pass.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::indexer::scanner::scan_directory;
use crate::models::{DirectoryEntry, IndexConfig};
use crate::render::render_index;
use crate::writer::write_index;

/// Outcome of a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Entries in page order
    pub entries: Vec<DirectoryEntry>,
    /// Rendered document
    pub html: String,
    /// Where the page was written, `None` for a preview
    pub output_path: Option<PathBuf>,
}

/// Build the index page for `root` and write it to `root/index.html`
///
/// # Errors
///
/// Returns an error if the root or one of its children cannot be read, or if the output
/// file cannot be written. The existing `index.html` is untouched when scanning fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dir_index::{IndexConfig, generate_index};
///
/// let report = generate_index(Path::new("."), &IndexConfig::english())?;
/// println!("Linked {} directories", report.entries.len());
/// # Ok::<(), dir_index::IndexError>(())
/// ```
pub fn generate_index(root: &Path, config: &IndexConfig) -> Result<GenerationReport> {
    let mut report = preview_index(root, config)?;
    report.output_path = Some(write_index(root, &report.html)?);
    Ok(report)
}

/// Scan and render without touching the filesystem
pub fn preview_index(root: &Path, config: &IndexConfig) -> Result<GenerationReport> {
    let entries = scan_directory(root, config)?;
    let html = render_index(&entries, config.locale);
    Ok(GenerationReport { entries, html, output_path: None })
}
