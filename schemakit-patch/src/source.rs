use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A text file loaded for patching.
///
/// Keeps the content as read so callers can tell whether a patch changed it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    original: String,
    content: String,
}

impl SourceFile {
    /// Read a file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            original: content.clone(),
            content,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the current content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Returns true if the content differs from what was read.
    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    /// Write the current content back to disk.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}
