use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use schemakit_config::validate_module_name;
use schemakit_core::ModuleName;

use super::{UnwrapOrExit, load_config};
use crate::{
    editor, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct AddCommand {
    /// Module identifier in lowerCamelCase (e.g., heroBanner)
    pub name: String,

    /// Project directory containing the schema tree
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Path to schemakit.toml (defaults to <dir>/schemakit.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Do not open the new module file in the editor
    #[arg(long)]
    pub no_open: bool,
}

impl AddCommand {
    pub fn run(&self) -> Result<()> {
        validate_module_name(&self.name).unwrap_or_exit();
        let config = load_config(&self.dir, self.config.as_deref()).unwrap_or_exit();
        let editor = config.editor.clone();

        let (ctx, report) = ops::add(config, ModuleName::new(&self.name), &self.dir, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        if self.dry_run || self.no_open || !editor.enabled {
            tracing::debug!("not opening the editor");
        } else {
            editor::open(&editor.command, &ctx.module_path());
        }

        Ok(())
    }
}
