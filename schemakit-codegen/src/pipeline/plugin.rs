//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::ScaffoldContext;

/// A plugin that can hook into the scaffold pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the scaffold context.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut ScaffoldContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut ScaffoldContext) -> Result<()> {
        Ok(())
    }
}

/// Logs phase boundaries and the change each phase recorded.
pub struct TracingPlugin;

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut ScaffoldContext) -> Result<()> {
        tracing::debug!(phase, module = %ctx.module, dry_run = ctx.dry_run, "phase started");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut ScaffoldContext) -> Result<()> {
        if let Some(change) = ctx.changes.last() {
            tracing::debug!(
                phase,
                path = %ctx.display_path(&change.path),
                kind = %change.kind,
                "phase finished"
            );
        }
        Ok(())
    }
}
