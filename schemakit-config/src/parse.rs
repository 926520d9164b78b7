//! Configuration parsing from files and strings.

use std::str::FromStr;

use crate::{Config, Error, Result, error::SourceContext, validate::validate_config};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, crate::CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a schemakit.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse and validate a configuration with the given filename for error reporting.
pub(crate) fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}
