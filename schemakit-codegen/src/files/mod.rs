//! Files written by schemakit.

mod config_toml;
mod module_file;

pub use config_toml::ConfigToml;
pub use module_file::ModuleFile;
