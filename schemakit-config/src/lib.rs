//! Configuration for schemakit.
//!
//! Every path, name, and marker the scaffolder relies on is read from an
//! optional `schemakit.toml`. Missing keys fall back to defaults that match
//! a stock Sanity studio layout:
//!
//! ```toml
//! [paths]
//! schemas = "schemas"
//! modules = "modules"
//! registry = "index.ts"
//! composite = "objects/builder.ts"
//! extension = "ts"
//!
//! [module]
//! namespace = "module"
//! icon = "❓"
//!
//! [registry]
//! list = "modules"
//! entry_prefix = "modules"
//! section_marker = ["// Modules", "// ---------------"]
//!
//! [editor]
//! enabled = true
//! command = "code -r {path}"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod parse;
mod validate;

pub use config::{Config, EditorConfig, ModuleConfig, PathsConfig, RegistryConfig};
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, ConfigFile};
pub use validate::validate_module_name;
