use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Project directory containing the schema tree
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Path to schemakit.toml (defaults to <dir>/schemakit.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.dir, self.config.as_deref()).unwrap_or_exit();
        let report = ops::list(&config, &self.dir)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
