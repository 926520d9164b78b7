//! TypeScript export builder.

use super::Value;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone)]
pub enum Export {
    /// `export default <expr>`
    Default(Value),
    /// `export {a, b}`
    Named(Vec<String>),
}

impl Export {
    /// Export an expression as the module default.
    pub fn default_value(value: impl Into<Value>) -> Self {
        Self::Default(value.into())
    }

    /// Export named items.
    pub fn named(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Named(names.into_iter().map(Into::into).collect())
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Default(value) => value.to_fragments_with("export default ", ""),
            Self::Named(names) => vec![CodeFragment::Line(format!(
                "export {{{}}}",
                names.join(", ")
            ))],
        }
    }
}
