//! Code generation and the scaffold pipeline for schemakit.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - TypeScript syntax builders (imports, objects, calls, exports)
//! - [`files`] - Files written by schemakit (module definitions, default config)
//! - [`pipeline`] - Phases that create a module and register it

pub mod ast;
pub mod builder;
pub mod files;
pub mod pipeline;

mod code_file;

pub use code_file::CodeFile;
