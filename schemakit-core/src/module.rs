use std::fmt;

use crate::naming::{capitalize, to_title_case};

/// The identifier of a content-schema module (e.g., "heroBanner").
///
/// The raw identifier is used as file name and type suffix; the other
/// names are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title ("heroBanner" -> "Hero Banner").
    pub fn title(&self) -> String {
        to_title_case(&self.0)
    }

    /// Identifier with its first letter uppercased ("heroBanner" -> "HeroBanner").
    pub fn pascal(&self) -> String {
        capitalize(&self.0)
    }

    /// Namespaced type name ("heroBanner" in "module" -> "module.heroBanner").
    pub fn qualified(&self, namespace: &str) -> String {
        format!("{}.{}", namespace, self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
