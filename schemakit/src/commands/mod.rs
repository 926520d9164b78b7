mod add;
mod completions;
mod init;
mod list;

use std::path::Path;

use add::AddCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use list::ListCommand;
use schemakit_config::{Config, ConfigFile};

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for schemakit_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `config` if given, otherwise `<dir>/schemakit.toml` if present,
/// otherwise the defaults.
pub(crate) fn load_config(dir: &Path, config: Option<&Path>) -> schemakit_config::Result<Config> {
    match config {
        Some(path) => ConfigFile::open(path).map(ConfigFile::into_config),
        None => Ok(ConfigFile::discover(dir)?
            .map(ConfigFile::into_config)
            .unwrap_or_default()),
    }
}

#[derive(Parser)]
#[command(name = "schemakit")]
#[command(version)]
#[command(about = "Scaffold content-schema modules and register them in the studio")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Add(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a module file and register it in the index and builder
    Add(AddCommand),

    /// Write a default schemakit.toml
    Init(InitCommand),

    /// List module files and whether each is registered
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
