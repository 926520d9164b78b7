//! Expression values shared by objects, arrays, and calls.

use super::{ArrowFn, Call, JsArray, JsObject};
use crate::builder::CodeFragment;

/// A TypeScript expression used as a property value, array element, or argument.
#[derive(Debug, Clone)]
pub enum Value {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// An object literal.
    Object(JsObject),
    /// An array literal.
    Array(JsArray),
    /// A function call.
    Call(Call),
    /// An expression-bodied arrow function.
    ArrowFn(ArrowFn),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// Render on a single line if the value has no multi-line parts.
    pub fn inline(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(string_literal(s)),
            Self::Raw(s) => Some(s.clone()),
            Self::Object(obj) if obj.is_empty() => Some("{}".to_string()),
            Self::Array(arr) if arr.is_empty() => Some("[]".to_string()),
            Self::Object(_) | Self::Array(_) => None,
            Self::Call(call) => call.inline(),
            Self::ArrowFn(func) => func.body().inline().map(|b| func.head() + &b),
        }
    }

    /// Render the value with `prefix` before its first line and `suffix`
    /// after its last one.
    ///
    /// Multi-line values open on the prefix line and close on the suffix
    /// line, so `key: ` / `,` produce an object property.
    pub fn to_fragments_with(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if let Some(line) = self.inline() {
            return vec![CodeFragment::Line(format!("{prefix}{line}{suffix}"))];
        }

        match self {
            Self::Object(obj) => vec![CodeFragment::block(
                format!("{prefix}{{"),
                obj.property_fragments(),
                Some(format!("}}{suffix}")),
            )],
            Self::Array(arr) => vec![CodeFragment::block(
                format!("{prefix}["),
                arr.element_fragments(),
                Some(format!("]{suffix}")),
            )],
            Self::Call(call) => call.to_fragments_with(prefix, suffix),
            Self::ArrowFn(func) => func
                .body()
                .to_fragments_with(&format!("{prefix}{}", func.head()), suffix),
            // inline() always succeeds for literals
            Self::String(_) | Self::Raw(_) => Vec::new(),
        }
    }
}

impl From<JsObject> for Value {
    fn from(value: JsObject) -> Self {
        Self::Object(value)
    }
}

impl From<JsArray> for Value {
    fn from(value: JsArray) -> Self {
        Self::Array(value)
    }
}

impl From<Call> for Value {
    fn from(value: Call) -> Self {
        Self::Call(value)
    }
}

impl From<ArrowFn> for Value {
    fn from(value: ArrowFn) -> Self {
        Self::ArrowFn(value)
    }
}

/// Quote a string as a single-quoted TypeScript literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
