//! Validation of module names and configuration values.

use miette::SourceSpan;

use crate::{Config, Error, Result, error::SourceContext};

/// Validate a module identifier before anything touches the file system.
///
/// The name ends up in a file name, an import binding, and a quoted type
/// name, so it is restricted to a plain ASCII identifier.
pub fn validate_module_name(name: &str) -> Result<()> {
    match validate_identifier(name) {
        Some(reason) => Err(Error::invalid_module_name(name, reason)),
        None => Ok(()),
    }
}

/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Find the span of a `key = ...` assignment in the TOML source
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [format!("{} =", key), format!("{}=", key)];

    for pattern in &patterns {
        let mut offset = 0;
        while let Some(pos) = src[offset..].find(pattern.as_str()) {
            let start = offset + pos;
            // Only accept matches at the start of a line
            let at_line_start = src[..start]
                .chars()
                .next_back()
                .is_none_or(|c| c == '\n' || c == ' ' || c == '\t');
            if at_line_start {
                return Some(SourceSpan::from((start, key.len())));
            }
            offset = start + pattern.len();
        }
    }

    None
}

/// Validate values that would otherwise produce broken output.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let required = [
        ("extension", config.paths.extension.as_str()),
        ("modules", config.paths.modules.as_str()),
        ("namespace", config.module.namespace.as_str()),
        ("list", config.registry.list.as_str()),
        ("entry_prefix", config.registry.entry_prefix.as_str()),
    ];

    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("'{}' cannot be empty", key),
                find_key_span(ctx.src(), key),
            ));
        }
    }

    if config.paths.extension.starts_with('.') {
        return Err(ctx.validation_error(
            "'extension' must not start with a dot",
            find_key_span(ctx.src(), "extension"),
        ));
    }

    if validate_identifier(&config.registry.list).is_some() {
        return Err(ctx.validation_error(
            "'list' must be a plain identifier",
            find_key_span(ctx.src(), "list"),
        ));
    }

    if validate_identifier(&config.registry.entry_prefix).is_some() {
        return Err(ctx.validation_error(
            "'entry_prefix' must be a plain identifier",
            find_key_span(ctx.src(), "entry_prefix"),
        ));
    }

    if config.editor.enabled && config.editor.command.trim().is_empty() {
        return Err(ctx.validation_error(
            "'command' cannot be empty while the editor is enabled",
            find_key_span(ctx.src(), "command"),
        ));
    }

    Ok(())
}
