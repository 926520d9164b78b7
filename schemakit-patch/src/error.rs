use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schemakit-patch operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(schemakit::read),
        help("paths are resolved from the project directory; check [paths] in schemakit.toml")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(schemakit::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid patch pattern")]
    #[diagnostic(code(schemakit::pattern))]
    Pattern(#[from] regex::Error),
}
