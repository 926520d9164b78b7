//! Core utilities and types for schemakit.
//!
//! This crate provides the module naming rules and the generated-file
//! abstraction shared by the rest of the workspace.

mod file;
mod module;
mod naming;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Module identity
pub use module::ModuleName;
// String utilities
pub use naming::{capitalize, to_title_case};
