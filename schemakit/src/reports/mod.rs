//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod add;
mod list;
mod output;

pub use add::{AddReport, ChangedFile};
pub use list::{ListReport, ModuleStatus};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::RecordingOutput;
