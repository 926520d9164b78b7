//! Add operation - scaffold and register a module.

use std::path::Path;

use eyre::Result;
use schemakit_codegen::pipeline::{Diagnostic, Pipeline, ScaffoldContext, TracingPlugin};
use schemakit_config::Config;
use schemakit_core::ModuleName;

use crate::reports::{AddReport, ChangedFile};

/// Execute the add operation.
///
/// Returns the finished context alongside the report so the caller can
/// act on the written files.
pub fn add(
    config: Config,
    module: ModuleName,
    root: &Path,
    dry_run: bool,
) -> Result<(ScaffoldContext, AddReport)> {
    let ctx = ScaffoldContext::new(config, module, root).dry_run(dry_run);
    let ctx = Pipeline::new().plugin(TracingPlugin).run(ctx)?;

    let report = AddReport {
        module: ctx.module.to_string(),
        type_name: ctx.module.qualified(&ctx.config.module.namespace),
        dry_run,
        files: ctx
            .changes
            .iter()
            .map(|change| ChangedFile {
                path: ctx.display_path(&change.path),
                kind: change.kind,
                content: change.content.clone(),
            })
            .collect(),
        warnings: ctx.warnings().map(diagnostic_line).collect(),
        notes: ctx.infos().map(diagnostic_line).collect(),
    };

    Ok((ctx, report))
}

fn diagnostic_line(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(location) => format!("{}: {}", location, diag.message),
        None => diag.message.clone(),
    }
}
