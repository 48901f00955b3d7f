//! Directory Index - Generate a landing page for a tree of static sites
//!
//! This library scans a root directory for immediate subdirectories that contain their
//! own `index.html` and writes a single self-contained `index.html` linking to each. It
//! supports:
//!
//! - Filtering out hidden entries, plain files and directories without an `index.html`
//! - Generic (title-cased English) or Persian-ordinal display names
//! - Lexicographic or numeric-first ordering
//! - Rendering an English or right-to-left Persian page with escaped, embedded data
//! - Atomic overwrite of the output file
//!
//! # Example
//!
//! ```no_run
//! use dir_index::{IndexConfig, generate_index};
//! use std::path::PathBuf;
//!
//! let root = PathBuf::from("/srv/courses");
//! let report = generate_index(&root, &IndexConfig::persian())?;
//! println!("Linked {} directories", report.entries.len());
//! # Ok::<(), dir_index::IndexError>(())
//! ```

pub mod cli;
pub mod error;
pub mod indexer;
pub mod models;
pub mod render;
pub mod writer;

// Re-export commonly used types
pub use error::IndexError;
pub use indexer::{GenerationReport, generate_index, preview_index, scan_directory};
pub use models::{DirectoryEntry, IndexConfig, Locale, NamingPolicy, OrderingPolicy};
pub use render::render_index;
pub use writer::write_index;
