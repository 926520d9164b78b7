//! Patching of the registry file: module imports plus the module list.
//!
//! A typical registry looks like this:
//!
//! ```text
//! // Modules
//! // ---------------
//! import modulesHero from './modules/hero'
//! import modulesGallery from './modules/gallery'
//!
//! const modules = [
//!   modulesHero,
//!   modulesGallery,
//! ]
//! ```

use std::sync::LazyLock;

use regex::Regex;
use schemakit_core::ModuleName;

use crate::{Anchor, Edit, Miss, Patched, Result};

/// Last element of a multi-line list body: indentation, bare word, optional
/// comma, and the whitespace before the closing bracket.
static TRAILING_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n(?P<indent>[ \t]*)(?P<last>\w+),?(?P<tail>\s*)\z")
        .expect("trailing element pattern is valid")
});

/// Indentation used when the list's own indentation cannot be detected.
const DEFAULT_INDENT: &str = "  ";

/// Names and markers that describe a registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLayout {
    /// Name of the list literal (`const <list> = [...]`)
    pub list: String,
    /// Prefix of import bindings and list entries
    pub entry_prefix: String,
    /// Import specifier of the module directory (e.g., "./modules")
    pub import_dir: String,
    /// Text that opens the import section, including its final newline
    pub section_marker: String,
}

impl RegistryLayout {
    /// The token referencing `module` inside the list ("bar" -> "modulesBar").
    pub fn entry_token(&self, module: &ModuleName) -> String {
        format!("{}{}", self.entry_prefix, module.pascal())
    }

    /// The import statement for `module`.
    pub fn import_line(&self, module: &ModuleName) -> String {
        format!(
            "import {} from '{}/{}'",
            self.entry_token(module),
            self.import_dir,
            module
        )
    }
}

impl Default for RegistryLayout {
    fn default() -> Self {
        Self {
            list: "modules".to_string(),
            entry_prefix: "modules".to_string(),
            import_dir: "./modules".to_string(),
            section_marker: "// Modules\n// ---------------\n".to_string(),
        }
    }
}

/// Result of patching both regions of a registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPatch {
    pub content: String,
    pub import: Edit,
    pub entry: Edit,
}

impl RegistryPatch {
    /// Returns true if either region changed.
    pub fn is_changed(&self) -> bool {
        self.import.is_inserted() || self.entry.is_inserted()
    }
}

/// Inserts module imports and list entries into a registry file.
#[derive(Debug, Clone)]
pub struct RegistryPatcher {
    layout: RegistryLayout,
    import_pattern: Regex,
    list_pattern: Regex,
}

impl RegistryPatcher {
    /// Compile the patterns for a layout.
    pub fn new(layout: RegistryLayout) -> Result<Self> {
        let import_pattern = Regex::new(&format!(
            r"(?m)^import {}\w+ from '{}/\w+'",
            regex::escape(&layout.entry_prefix),
            regex::escape(&layout.import_dir),
        ))?;
        // Non-greedy up to the first closing bracket; nested brackets are not supported.
        let list_pattern = Regex::new(&format!(
            r"(?s)\bconst\s+{}\s*=\s*\[(?P<body>.*?)\]",
            regex::escape(&layout.list),
        ))?;

        Ok(Self {
            layout,
            import_pattern,
            list_pattern,
        })
    }

    pub fn layout(&self) -> &RegistryLayout {
        &self.layout
    }

    /// Apply the import insertion, then the list-entry insertion.
    pub fn patch(&self, content: &str, module: &ModuleName) -> RegistryPatch {
        let imported = self.insert_import(content, module);
        let listed = self.insert_list_entry(&imported.content, module);

        RegistryPatch {
            content: listed.content,
            import: imported.edit,
            entry: listed.edit,
        }
    }

    /// Returns true if the import line for `module` occurs anywhere in `content`.
    ///
    /// A substring test, so `import x from './modules/x';` counts as present.
    pub fn has_import(&self, content: &str, module: &ModuleName) -> bool {
        content.contains(&self.layout.import_line(module))
    }

    /// Returns true if the list literal references `module`.
    pub fn has_list_entry(&self, content: &str, module: &ModuleName) -> bool {
        let token = self.layout.entry_token(module);
        self.list_pattern
            .captures(content)
            .and_then(|caps| caps.name("body"))
            .is_some_and(|body| contains_word(body.as_str(), &token))
    }

    /// Insert the import line after the last module import, or below the
    /// section marker when there is none.
    pub fn insert_import(&self, content: &str, module: &ModuleName) -> Patched {
        if self.has_import(content, module) {
            return Patched::unchanged(content, Edit::AlreadyPresent);
        }

        let line = self.layout.import_line(module);

        if let Some(last) = self.import_pattern.find_iter(content).last() {
            let at = last.end();
            let patched = format!("{}\n{}{}", &content[..at], line, &content[at..]);
            return Patched::inserted(patched, Anchor::AfterLastImport);
        }

        let marker = &self.layout.section_marker;
        if !marker.is_empty() {
            if let Some(pos) = content.find(marker.as_str()) {
                let at = pos + marker.len();
                let patched = format!("{}{}\n{}", &content[..at], line, &content[at..]);
                return Patched::inserted(patched, Anchor::SectionMarker);
            }
        }

        Patched::unchanged(content, Edit::Skipped(Miss::NoImportAnchor))
    }

    /// Append the entry token to the list literal.
    pub fn insert_list_entry(&self, content: &str, module: &ModuleName) -> Patched {
        let Some(body) = self
            .list_pattern
            .captures(content)
            .and_then(|caps| caps.name("body"))
        else {
            return Patched::unchanged(content, Edit::Skipped(Miss::NoListLiteral));
        };

        let token = self.layout.entry_token(module);
        if contains_word(body.as_str(), &token) {
            return Patched::unchanged(content, Edit::AlreadyPresent);
        }

        let (new_body, anchor) = if body.as_str().contains('\n') {
            append_multi_line(body.as_str(), &token)
        } else {
            (append_single_line(body.as_str(), &token), Anchor::SingleLine)
        };

        let patched = format!(
            "{}{}{}",
            &content[..body.start()],
            new_body,
            &content[body.end()..]
        );
        Patched::inserted(patched, anchor)
    }
}

/// Add `token` after the last element, on its own line with the same indentation.
fn append_multi_line(body: &str, token: &str) -> (String, Anchor) {
    if let Some(caps) = TRAILING_ELEMENT.captures(body) {
        let start = caps.get(0).map_or(body.len(), |m| m.start());
        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let last = caps.name("last").map_or("", |m| m.as_str());
        let tail = caps.name("tail").map_or("", |m| m.as_str());

        let patched = format!(
            "{}\n{indent}{last},\n{indent}{token},{tail}",
            &body[..start]
        );
        return (patched, Anchor::AfterLastElement);
    }

    let kept = body.trim_end();
    let tail = &body[kept.len()..];
    let separator = if kept.trim().is_empty() || kept.ends_with(',') {
        ""
    } else {
        ","
    };
    let patched = format!("{kept}{separator}\n{DEFAULT_INDENT}{token},{tail}");
    (patched, Anchor::DefaultIndent)
}

/// Add `token` to a list written on one line.
fn append_single_line(body: &str, token: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        token.to_string()
    } else if trimmed.ends_with(',') {
        format!("{trimmed} {token},")
    } else {
        format!("{trimmed}, {token}")
    }
}

/// Returns true if `word` occurs in `haystack` as a whole identifier.
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(i, _)| {
        let before = haystack[..i].chars().next_back();
        let after = haystack[i + word.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patcher() -> RegistryPatcher {
        RegistryPatcher::new(RegistryLayout::default()).unwrap()
    }

    #[test]
    fn test_entry_token_and_import_line() {
        let layout = RegistryLayout::default();
        let module = ModuleName::new("bar");
        assert_eq!(layout.entry_token(&module), "modulesBar");
        assert_eq!(
            layout.import_line(&module),
            "import modulesBar from './modules/bar'"
        );
    }

    #[test]
    fn test_append_single_line() {
        assert_eq!(append_single_line("moduleFoo", "modulesBar"), "moduleFoo, modulesBar");
        assert_eq!(
            append_single_line("moduleFoo,", "modulesBar"),
            "moduleFoo, modulesBar,"
        );
        assert_eq!(append_single_line("", "modulesBar"), "modulesBar");
        assert_eq!(append_single_line("  ", "modulesBar"), "modulesBar");
    }

    #[test]
    fn test_append_multi_line_keeps_indent() {
        let (body, anchor) = append_multi_line("\n    a,\n    b\n", "c");
        assert_eq!(body, "\n    a,\n    b,\n    c,\n");
        assert_eq!(anchor, Anchor::AfterLastElement);
    }

    #[test]
    fn test_append_multi_line_tab_indent() {
        let (body, _) = append_multi_line("\n\ta,\n", "b");
        assert_eq!(body, "\n\ta,\n\tb,\n");
    }

    #[test]
    fn test_append_multi_line_fallback() {
        let (body, anchor) = append_multi_line("\n    a,\n    ...extra\n", "b");
        assert_eq!(body, "\n    a,\n    ...extra,\n  b,\n");
        assert_eq!(anchor, Anchor::DefaultIndent);
    }

    #[test]
    fn test_append_multi_line_empty_body() {
        let (body, anchor) = append_multi_line("\n", "b");
        assert_eq!(body, "\n  b,\n");
        assert_eq!(anchor, Anchor::DefaultIndent);
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("a, modulesBar,", "modulesBar"));
        assert!(!contains_word("a, modulesBarBaz,", "modulesBar"));
        assert!(!contains_word("a, xmodulesBar,", "modulesBar"));
        assert!(!contains_word("", "modulesBar"));
    }

    #[test]
    fn test_has_list_entry() {
        let p = patcher();
        let module = ModuleName::new("bar");
        assert!(p.has_list_entry("const modules = [modulesBar]", &module));
        assert!(!p.has_list_entry("const modules = [modulesBarTwo]", &module));
        assert!(!p.has_list_entry("const other = [modulesBar]", &module));
    }

    #[test]
    fn test_list_pattern_requires_exact_name() {
        let p = patcher();
        let content = "const modulesExtra = [a]\n";
        let patched = p.insert_list_entry(content, &ModuleName::new("bar"));
        assert_eq!(patched.edit, Edit::Skipped(Miss::NoListLiteral));
        assert_eq!(patched.content, content);
    }
}
