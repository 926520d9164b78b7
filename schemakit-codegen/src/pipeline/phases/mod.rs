//! Built-in scaffold phases.

mod composite;
mod emit;
mod registry;

pub use composite::CompositePhase;
pub use emit::EmitModulePhase;
pub use registry::{RegistryPhase, registry_layout};

use std::path::Path;

use schemakit_patch::{Anchor, Edit};

use super::ScaffoldContext;

/// Turn a patch outcome into diagnostics.
fn report_edit(ctx: &mut ScaffoldContext, phase: &str, path: &Path, what: &str, edit: Edit) {
    match edit {
        Edit::Inserted(Anchor::DefaultIndent) => ctx.add_warning(
            phase,
            path,
            format!("{what} added with a two-space indent; the list indentation was not detected"),
        ),
        Edit::Inserted(anchor) => {
            tracing::debug!(phase, what, ?anchor, "inserted");
        }
        Edit::AlreadyPresent => ctx.add_info(phase, path, format!("{what} already present")),
        Edit::Skipped(miss) => {
            ctx.add_warning(phase, path, format!("{what} not added: {miss}"));
        }
    }
}
