//! Composite phase - adds the module type to the composite list.

use eyre::Result;
use schemakit_patch::{CompositePatcher, SourceFile};

use super::report_edit;
use crate::pipeline::{ChangeKind, Phase, ScaffoldContext};

/// Phase that patches the composite file.
///
/// Unlike the registry, the file is only written when the entry was added.
pub struct CompositePhase;

impl Phase for CompositePhase {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn description(&self) -> &'static str {
        "Add the module type to the composite list"
    }

    fn run(&self, ctx: &mut ScaffoldContext) -> Result<()> {
        let mut file = SourceFile::open(ctx.config.composite_path(&ctx.root))?;
        let patcher = CompositePatcher::new(&ctx.config.module.namespace);

        let patched = patcher.insert_entry(file.content(), &ctx.module);
        let path = file.path().to_path_buf();
        report_edit(ctx, self.name(), &path, "type entry", patched.edit);

        file.set_content(patched.content);
        let kind = if file.is_modified() {
            if !ctx.dry_run {
                file.save()?;
            }
            ChangeKind::Updated
        } else {
            ChangeKind::Unchanged
        };

        ctx.record(path, kind, file.content().to_string());
        Ok(())
    }
}
