//! Core operations.
//!
//! This module contains the business logic for schemakit commands,
//! separated from CLI argument parsing and output rendering.

pub mod add;
pub mod list;

pub use add::add;
pub use list::list;
