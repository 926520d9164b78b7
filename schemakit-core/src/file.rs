use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let existed = path.exists();

        match self.rules().overwrite {
            Overwrite::IfMissing if existed => Ok(WriteResult::Skipped),
            _ => {
                write_file(&path, &self.render())?;
                Ok(if existed {
                    WriteResult::Overwritten
                } else {
                    WriteResult::Created
                })
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was written
    Created,
    /// File existed and was replaced
    Overwritten,
    /// File was skipped (already exists)
    Skipped,
}

impl WriteResult {
    /// Returns true if anything was written to disk.
    pub fn is_written(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always replace the file.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Only create the file when it does not exist yet.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated modules)
    Always,
    /// Only create if file doesn't exist (configuration)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always()
    }
}
