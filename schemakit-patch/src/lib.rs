//! Text-level patching of the files that register schema modules.
//!
//! Patches work on raw source text with pattern matching; nothing is parsed
//! into a syntax tree, so the surrounding formatting is preserved. Each
//! operation is idempotent: running it against its own output reports
//! [`Edit::AlreadyPresent`] and leaves the text untouched.
//!
//! Patterns that cannot be located are not errors. They come back as
//! [`Edit::Skipped`] so the caller decides how loudly to report them.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod composite;
mod edit;
mod error;
mod registry;
mod source;

pub use composite::CompositePatcher;
pub use edit::{Anchor, Edit, Miss, Patched};
pub use error::{Error, Result};
pub use registry::{RegistryLayout, RegistryPatch, RegistryPatcher};
pub use source::SourceFile;
