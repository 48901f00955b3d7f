//! Data models for the directory index generator.
//!
//! - [`DirectoryEntry`] - One qualifying subdirectory: display name plus relative path
//! - [`IndexConfig`] - Naming, ordering and page-text selection for a run
//! - [`NamingPolicy`], [`OrderingPolicy`], [`Locale`] - The individual knobs of [`IndexConfig`]

pub mod config;
pub mod entry;

pub use config::{IndexConfig, Locale, NamingPolicy, OrderingPolicy, PageText};
pub use entry::{DirectoryEntry, INDEX_FILE_NAME};
