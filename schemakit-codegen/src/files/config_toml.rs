//! Default schemakit.toml generator.

use std::path::{Path, PathBuf};

use schemakit_config::CONFIG_FILE_NAME;
use schemakit_core::{FileRules, GeneratedFile, Overwrite};

/// The schemakit.toml configuration file, filled with the defaults.
pub struct ConfigToml {
    force: bool,
}

impl ConfigToml {
    pub fn new() -> Self {
        Self { force: false }
    }

    /// Replace an existing file instead of leaving it untouched.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl Default for ConfigToml {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for ConfigToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CONFIG_FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: if self.force {
                Overwrite::Always
            } else {
                Overwrite::IfMissing
            },
        }
    }

    fn render(&self) -> String {
        r#"# schemakit configuration. Every key is optional.

[paths]
# Root of the schema tree, relative to this file
schemas = "schemas"
# Module directory, relative to `schemas`
modules = "modules"
# Registry holding module imports and the module list
registry = "index.ts"
# Composite list of module types
composite = "objects/builder.ts"
extension = "ts"

[module]
# Generated type names are "<namespace>.<identifier>"
namespace = "module"
icon = "❓"

[registry]
# Name of the list literal: `const modules = [...]`
list = "modules"
# Import binding and list entry: "<entry_prefix><Identifier>"
entry_prefix = "modules"
# Comment lines after which the first module import is placed
section_marker = ["// Modules", "// ---------------"]

[editor]
enabled = true
# `{path}` is replaced by the new module file
command = "code -r {path}"
"#
        .to_string()
    }
}
