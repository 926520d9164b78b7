//! Scaffold context passed through pipeline phases.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use schemakit_config::Config;
use schemakit_core::ModuleName;

use super::diagnostic::{Diagnostic, Severity};

/// What a phase did (or would do, in a dry run) to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A new file.
    Created,
    /// An existing file replaced wholesale.
    Overwritten,
    /// An existing file patched in place.
    Updated,
    /// Nothing to change.
    Unchanged,
}

impl ChangeKind {
    /// Returns true if the file content differs after the phase.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Overwritten => write!(f, "overwritten"),
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// One file touched by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: ChangeKind,
    /// Content after the phase, whether or not it was written.
    pub content: String,
}

/// Context passed through all pipeline phases.
///
/// Carries the inputs of one scaffold run and accumulates the file changes
/// and diagnostics each phase produces.
#[derive(Debug)]
pub struct ScaffoldContext {
    pub config: Config,
    pub module: ModuleName,
    /// Project directory all configured paths are relative to.
    pub root: PathBuf,
    /// Compute every change but write nothing.
    pub dry_run: bool,
    pub changes: Vec<FileChange>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScaffoldContext {
    pub fn new(config: Config, module: ModuleName, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            module,
            root: root.into(),
            dry_run: false,
            changes: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Path of the module file this run creates.
    pub fn module_path(&self) -> PathBuf {
        self.config.module_path(&self.root, &self.module)
    }

    /// Path relative to the project directory, for messages.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Record what happened to a file.
    pub fn record(&mut self, path: PathBuf, kind: ChangeKind, content: String) {
        self.changes.push(FileChange {
            path,
            kind,
            content,
        });
    }

    /// Add a warning diagnostic about `path`.
    pub fn add_warning(&mut self, phase: &str, path: &Path, message: impl Into<String>) {
        let location = self.display_path(path);
        self.diagnostics
            .push(Diagnostic::warning(phase, message).at(location));
    }

    /// Add an info diagnostic about `path`.
    pub fn add_info(&mut self, phase: &str, path: &Path, message: impl Into<String>) {
        let location = self.display_path(path);
        self.diagnostics.push(Diagnostic::info(phase, message).at(location));
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Get all info diagnostics.
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Info))
    }

    /// The recorded change for `path`, if a phase touched it.
    pub fn change(&self, path: &Path) -> Option<&FileChange> {
        self.changes.iter().find(|c| c.path == path)
    }
}
