use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures that abort a generator run. Neither kind is retried.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to read {}", path.display())]
    FilesystemRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", path.display())]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FilesystemRead { path: path.as_ref().to_path_buf(), source }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FilesystemWrite { path: path.as_ref().to_path_buf(), source }
    }

    /// Path the failing operation was working on
    pub fn path(&self) -> &Path {
        match self {
            Self::FilesystemRead { path, .. } | Self::FilesystemWrite { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
