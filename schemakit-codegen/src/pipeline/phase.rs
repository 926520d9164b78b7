//! Pipeline phase trait.

use eyre::Result;

use super::ScaffoldContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    /// The phase name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A phase in the scaffold pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads the
/// context, touches at most one file, and records what it did.
///
/// Built-in phases:
/// - `EmitModulePhase` - writes the module file
/// - `RegistryPhase` - adds the import and list entry to the registry
/// - `CompositePhase` - adds the type entry to the composite list
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the scaffold context.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or written. Patterns that
    /// cannot be located are recorded as diagnostics instead.
    fn run(&self, ctx: &mut ScaffoldContext) -> Result<()>;

    /// Get information about this phase.
    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
