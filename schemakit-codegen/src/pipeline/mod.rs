//! Scaffold pipeline.
//!
//! A [`Pipeline`] runs the steps that add one module to a project:
//!
//! - Explicit phase boundaries (emit → registry → composite)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Recorded file changes via [`ScaffoldContext`]
//!
//! # Example
//!
//! ```ignore
//! use schemakit_codegen::pipeline::{Pipeline, ScaffoldContext, TracingPlugin};
//!
//! let ctx = ScaffoldContext::new(config, module, root).dry_run(true);
//! let ctx = Pipeline::new().plugin(TracingPlugin).run(ctx)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{ChangeKind, FileChange, ScaffoldContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
