//! Directory scanning and the end-to-end generation pipeline.
//!
//! # Error Handling Strategy
//!
//! The pipeline is all-or-nothing:
//!
//! - **Filtering is not failure**: hidden entries, plain files and directories without an
//!   `index.html` are skipped without any diagnostic.
//! - **Filesystem errors abort**: an unreadable root or child, or an unwritable output,
//!   stops the run with an [`IndexError`](crate::error::IndexError) naming the path.
//!   Nothing is retried and no partial page is written.

pub mod builder;
pub mod naming;
pub mod ordering;
pub mod scanner;

pub use builder::{GenerationReport, generate_index, preview_index};
pub use scanner::scan_directory;
