//! Pipeline orchestrator.

use eyre::Result;

use super::{
    Phase, Plugin, ScaffoldContext,
    phases::{CompositePhase, EmitModulePhase, RegistryPhase},
};

/// The scaffold pipeline orchestrator.
///
/// Runs the built-in phases (emit, registry, composite) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// Phases run strictly in sequence. A failing phase stops the run; files
/// written by earlier phases stay on disk.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails.
    pub fn run(&self, mut ctx: ScaffoldContext) -> Result<ScaffoldContext> {
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(EmitModulePhase),
            Box::new(RegistryPhase),
            Box::new(CompositePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut ScaffoldContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
