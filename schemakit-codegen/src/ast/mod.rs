//! TypeScript syntax builders for module definitions.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod arrays;
mod calls;
mod exports;
mod imports;
mod objects;
mod values;

pub use arrays::JsArray;
pub use calls::{ArrowFn, Call};
pub use exports::Export;
pub use imports::Import;
pub use objects::{JsObject, Property};
pub use values::{Value, string_literal};
