/*!
 * Core types shared by the pipeline stages
 */

use std::path::PathBuf;

/// A file accepted by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path, used to read the file
    pub path: PathBuf,
    /// Path relative to the traversal root, used in the prompt
    pub relative: PathBuf,
}

impl FileEntry {
    /// Relative path with forward slashes, as written into the prompt
    pub fn display_path(&self) -> String {
        self.relative.to_string_lossy().replace('\\', "/")
    }
}
