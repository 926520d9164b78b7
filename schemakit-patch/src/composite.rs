//! Patching of the composite file that lists module types.
//!
//! ```text
//! of: [
//!   {type: 'module.hero'},
//!   {type: 'module.gallery'},
//! ],
//! ```

use std::sync::LazyLock;

use regex::Regex;
use schemakit_core::ModuleName;

use crate::{Anchor, Edit, Miss, Patched};

/// A type entry followed, across any whitespace, by the closing bracket of its list.
static LAST_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<indent>[ \t]*)(?P<entry>\{type: '[^']+'\},)\n(?P<close>\s*)\]")
        .expect("last entry pattern is valid")
});

/// Inserts type-discriminator entries into a composite file.
#[derive(Debug, Clone)]
pub struct CompositePatcher {
    namespace: String,
}

impl CompositePatcher {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The entry text for `module`, without indentation.
    pub fn entry(&self, module: &ModuleName) -> String {
        format!("{{type: '{}'}},", module.qualified(&self.namespace))
    }

    /// Returns true if the entry for `module` is present, whatever its indentation.
    pub fn has_entry(&self, content: &str, module: &ModuleName) -> bool {
        content.contains(&self.entry(module))
    }

    /// Insert the entry before the closing bracket that follows the first
    /// matching type entry, using that entry's indentation.
    pub fn insert_entry(&self, content: &str, module: &ModuleName) -> Patched {
        if self.has_entry(content, module) {
            return Patched::unchanged(content, Edit::AlreadyPresent);
        }

        let Some(caps) = LAST_ENTRY.captures(content) else {
            return Patched::unchanged(content, Edit::Skipped(Miss::NoCompositeAnchor));
        };
        let Some(whole) = caps.get(0) else {
            return Patched::unchanged(content, Edit::Skipped(Miss::NoCompositeAnchor));
        };

        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let existing = caps.name("entry").map_or("", |m| m.as_str());
        let close = caps.name("close").map_or("", |m| m.as_str());

        let patched = format!(
            "{}{indent}{existing}\n{indent}{}\n{close}]{}",
            &content[..whole.start()],
            self.entry(module),
            &content[whole.end()..]
        );
        Patched::inserted(patched, Anchor::AfterLastEntry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry() {
        let patcher = CompositePatcher::new("module");
        assert_eq!(
            patcher.entry(&ModuleName::new("heroBanner")),
            "{type: 'module.heroBanner'},"
        );
    }

    #[test]
    fn test_has_entry_ignores_indentation() {
        let patcher = CompositePatcher::new("module");
        let module = ModuleName::new("bar");
        assert!(patcher.has_entry("  {type: 'module.bar'},\n", &module));
        assert!(patcher.has_entry("        {type: 'module.bar'},\n", &module));
        assert!(!patcher.has_entry("{type: 'module.barBaz'},\n", &module));
    }

    #[test]
    fn test_entry_without_trailing_comma_is_not_an_anchor() {
        let patcher = CompositePatcher::new("module");
        let content = "of: [\n  {type: 'module.foo'}\n]\n";
        let patched = patcher.insert_entry(content, &ModuleName::new("bar"));
        assert_eq!(patched.edit, Edit::Skipped(Miss::NoCompositeAnchor));
        assert_eq!(patched.content, content);
    }
}
