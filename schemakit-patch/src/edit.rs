//! Outcomes of a single patch operation.

use std::fmt;

/// Where an inserted line or entry was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// After the last existing module import.
    AfterLastImport,
    /// Directly below the module section marker.
    SectionMarker,
    /// After the last element of a multi-line list, reusing its indentation.
    AfterLastElement,
    /// At the end of a multi-line list with a two-space indent.
    DefaultIndent,
    /// Appended to a single-line list.
    SingleLine,
    /// After the last entry of the composite list, reusing its indentation.
    AfterLastEntry,
}

/// Why a patch left the text unchanged although the entry was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// No module import and no section marker to insert after.
    NoImportAnchor,
    /// The list literal declaration was not found.
    NoListLiteral,
    /// No `{type: '...'},` entry followed by the closing bracket.
    NoCompositeAnchor,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Miss::NoImportAnchor => {
                write!(f, "no module import or section marker to insert the import after")
            }
            Miss::NoListLiteral => write!(f, "list literal not found"),
            Miss::NoCompositeAnchor => {
                write!(f, "no type entry followed by a closing bracket")
            }
        }
    }
}

/// Outcome of one patch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The text was changed.
    Inserted(Anchor),
    /// The entry already exists; the text is unchanged.
    AlreadyPresent,
    /// The entry is missing but could not be placed; the text is unchanged.
    Skipped(Miss),
}

impl Edit {
    /// Returns true if the text was changed.
    pub fn is_inserted(&self) -> bool {
        matches!(self, Edit::Inserted(_))
    }

    /// Returns the reason if the edit was skipped.
    pub fn miss(&self) -> Option<Miss> {
        match self {
            Edit::Skipped(miss) => Some(*miss),
            _ => None,
        }
    }
}

/// Patched text together with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    pub edit: Edit,
}

impl Patched {
    pub(crate) fn unchanged(content: &str, edit: Edit) -> Self {
        Self {
            content: content.to_string(),
            edit,
        }
    }

    pub(crate) fn inserted(content: String, anchor: Anchor) -> Self {
        Self {
            content,
            edit: Edit::Inserted(anchor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_helpers() {
        assert!(Edit::Inserted(Anchor::SingleLine).is_inserted());
        assert!(!Edit::AlreadyPresent.is_inserted());
        assert_eq!(
            Edit::Skipped(Miss::NoListLiteral).miss(),
            Some(Miss::NoListLiteral)
        );
        assert_eq!(Edit::AlreadyPresent.miss(), None);
    }

    #[test]
    fn test_miss_display() {
        assert_eq!(Miss::NoListLiteral.to_string(), "list literal not found");
    }
}
