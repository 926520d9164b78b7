//! TypeScript/JavaScript array literal builder.

use super::Value;
use crate::builder::CodeFragment;

/// Builder for JavaScript/TypeScript array literals.
///
/// Arrays with only inline elements still render one element per line,
/// each followed by a comma.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<Value>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string element (will be quoted).
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(Value::String(value.into()));
        self
    }

    /// Add a raw expression element (will not be quoted).
    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(Value::Raw(value.into()));
        self
    }

    /// Add any element.
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.elements.push(value.into());
        self
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn element_fragments(&self) -> Vec<CodeFragment> {
        self.elements
            .iter()
            .flat_map(|e| e.to_fragments_with("", ","))
            .collect()
    }
}
