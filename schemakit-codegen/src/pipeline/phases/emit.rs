//! Emit phase - writes the module definition file.

use eyre::Result;
use schemakit_core::{GeneratedFile, WriteResult};

use crate::{
    files::ModuleFile,
    pipeline::{ChangeKind, Phase, ScaffoldContext},
};

/// Phase that writes `<modules>/<identifier>.<ext>` from the template.
///
/// The file is replaced if it already exists; a warning is recorded so the
/// lost edits do not go unnoticed.
pub struct EmitModulePhase;

impl Phase for EmitModulePhase {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn description(&self) -> &'static str {
        "Write the module definition file"
    }

    fn run(&self, ctx: &mut ScaffoldContext) -> Result<()> {
        let file = ModuleFile::new(&ctx.config, &ctx.module);
        let path = file.path(&ctx.root);
        let content = file.render();

        let kind = if ctx.dry_run {
            if path.exists() {
                ChangeKind::Overwritten
            } else {
                ChangeKind::Created
            }
        } else {
            match file.write(&ctx.root)? {
                WriteResult::Created => ChangeKind::Created,
                WriteResult::Overwritten => ChangeKind::Overwritten,
                WriteResult::Skipped => ChangeKind::Unchanged,
            }
        };

        if kind == ChangeKind::Overwritten {
            ctx.add_warning(
                self.name(),
                &path,
                "module file already existed and was replaced by the template",
            );
        }

        ctx.record(path, kind, content);
        Ok(())
    }
}
