//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating scan roots with child directories
pub struct SiteDirBuilder {
    temp_dir: TempDir,
}

impl SiteDirBuilder {
    /// Create a new builder with an empty scan root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the scan root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a child directory holding an index.html
    pub fn with_site(self, name: &str) -> Self {
        let dir = self.temp_dir.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create site dir");
        fs::write(dir.join("index.html"), format!("<h1>{}</h1>", name))
            .expect("Failed to write index.html");
        self
    }

    /// Add several child directories holding an index.html
    pub fn with_sites(self, names: &[&str]) -> Self {
        names.iter().fold(self, |builder, name| builder.with_site(name))
    }

    /// Add a child directory without an index.html
    pub fn with_empty_dir(self, name: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(name)).expect("Failed to create dir");
        self
    }

    /// Add a plain file at the root
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SiteDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the generated index.html from a scan root
pub fn read_index(root: &Path) -> String {
    fs::read_to_string(root.join("index.html")).expect("Failed to read generated index.html")
}

/// Extract the embedded `const directories = [...]` array as parsed JSON
pub fn embedded_data(html: &str) -> serde_json::Value {
    let start = html.find("const directories = ").expect("data array missing")
        + "const directories = ".len();
    let end = start + html[start..].find(";\n").expect("data array not terminated");
    serde_json::from_str(&html[start..end]).expect("data array is not valid JSON")
}
