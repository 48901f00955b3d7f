/// Marker file that qualifies a subdirectory for the index, and the name of the output file.
pub const INDEX_FILE_NAME: &str = "index.html";

/// A subdirectory of the scan root that contains an `index.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Human-readable label shown on the page
    pub name: String,
    /// Raw directory name, always a direct child of the scan root
    pub path: String,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }

    /// Unencoded link target, `{path}/index.html`
    pub fn link(&self) -> String {
        format!("{}/{}", self.path, INDEX_FILE_NAME)
    }
}
