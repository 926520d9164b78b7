use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use schemakit_codegen::files::ConfigToml;
use schemakit_core::{GeneratedFile, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write schemakit.toml into
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Replace an existing schemakit.toml
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = ConfigToml::new().force(self.force);
        let path = file.path(&self.dir);

        match file.write(&self.dir)? {
            WriteResult::Created => println!("Created {}", path.display()),
            WriteResult::Overwritten => println!("Replaced {}", path.display()),
            WriteResult::Skipped => {
                println!(
                    "{} already exists (use --force to replace it)",
                    path.display()
                );
            }
        }

        Ok(())
    }
}
