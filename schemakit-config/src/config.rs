use std::path::{Path, PathBuf};

use schemakit_core::ModuleName;
use serde::Deserialize;

/// Root configuration for schemakit.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locations of the schema tree and the files that get patched
    pub paths: PathsConfig,

    /// Contents of generated module files
    pub module: ModuleConfig,

    /// Shape of the registry file
    pub registry: RegistryConfig,

    /// Editor opened on the new module file
    pub editor: EditorConfig,
}

/// File locations, relative to the project directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root of the schema tree
    pub schemas: PathBuf,

    /// Module directory, relative to `schemas`
    pub modules: String,

    /// Registry file, relative to `schemas`
    pub registry: PathBuf,

    /// Composite file, relative to `schemas`
    pub composite: PathBuf,

    /// Source file extension, without the dot
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schemas: PathBuf::from("schemas"),
            modules: "modules".to_string(),
            registry: PathBuf::from("index.ts"),
            composite: PathBuf::from("objects").join("builder.ts"),
            extension: "ts".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Prefix of the qualified type name (`<namespace>.<identifier>`)
    pub namespace: String,

    /// Placeholder icon returned by the generated `icon` function
    pub icon: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            namespace: "module".to_string(),
            icon: "❓".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Name of the list literal (`const <list> = [...]`)
    pub list: String,

    /// Prefix of the import binding and list entry (`<entry_prefix><Identifier>`)
    pub entry_prefix: String,

    /// Comment lines that open the module import section
    pub section_marker: Vec<String>,
}

impl RegistryConfig {
    /// The section marker as it appears in the file, including the final newline.
    ///
    /// Returns an empty string when no marker is configured.
    pub fn marker(&self) -> String {
        if self.section_marker.is_empty() {
            return String::new();
        }
        format!("{}\n", self.section_marker.join("\n"))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            list: "modules".to_string(),
            entry_prefix: "modules".to_string(),
            section_marker: vec!["// Modules".to_string(), "// ---------------".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Open the new module file after scaffolding
    pub enabled: bool,

    /// Command template; `{path}` is replaced by the module file path
    pub command: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "code -r {path}".to_string(),
        }
    }
}

impl Config {
    /// Root of the schema tree.
    pub fn schemas_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.schemas)
    }

    /// Directory holding the module files.
    pub fn modules_dir(&self, root: &Path) -> PathBuf {
        self.schemas_dir(root).join(&self.paths.modules)
    }

    /// Path of the module file for `module`.
    pub fn module_path(&self, root: &Path, module: &ModuleName) -> PathBuf {
        self.modules_dir(root)
            .join(format!("{}.{}", module, self.paths.extension))
    }

    /// Path of the registry file.
    pub fn registry_path(&self, root: &Path) -> PathBuf {
        self.schemas_dir(root).join(&self.paths.registry)
    }

    /// Path of the composite file.
    pub fn composite_path(&self, root: &Path) -> PathBuf {
        self.schemas_dir(root).join(&self.paths.composite)
    }

    /// Import specifier of the module directory as seen from the registry file.
    pub fn import_dir(&self) -> String {
        format!("./{}", self.paths.modules.trim_matches('/'))
    }
}
