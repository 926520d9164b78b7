//! Function calls and arrow functions.

use super::Value;
use crate::builder::CodeFragment;

/// A function call such as `defineField({...})`.
///
/// When the last argument spans several lines the call hugs it: the
/// opening `(` stays on the callee line and `)` follows the closing brace.
#[derive(Debug, Clone)]
pub struct Call {
    callee: String,
    args: Vec<Value>,
}

impl Call {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub(crate) fn inline(&self) -> Option<String> {
        let args = self
            .args
            .iter()
            .map(Value::inline)
            .collect::<Option<Vec<_>>>()?;
        Some(format!("{}({})", self.callee, args.join(", ")))
    }

    pub(crate) fn to_fragments_with(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        let Some((last, leading)) = self.args.split_last() else {
            return vec![CodeFragment::Line(format!("{prefix}{}(){suffix}", self.callee))];
        };

        match leading.iter().map(Value::inline).collect::<Option<Vec<_>>>() {
            Some(inline) => {
                let mut head = format!("{prefix}{}(", self.callee);
                for arg in inline {
                    head.push_str(&arg);
                    head.push_str(", ");
                }
                last.to_fragments_with(&head, &format!("){suffix}"))
            }
            None => {
                let body = self
                    .args
                    .iter()
                    .flat_map(|a| a.to_fragments_with("", ","))
                    .collect();
                vec![CodeFragment::block(
                    format!("{prefix}{}(", self.callee),
                    body,
                    Some(format!("){suffix}")),
                )]
            }
        }
    }
}

/// An expression-bodied arrow function, e.g. `() => '❓'`.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    params: String,
    is_async: bool,
    body: Box<Value>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>, body: impl Into<Value>) -> Self {
        Self {
            params: params.into(),
            is_async: false,
            body: Box::new(body.into()),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub(crate) fn head(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        format!("{}({}) => ", async_kw, self.params)
    }

    pub(crate) fn body(&self) -> &Value {
        &self.body
    }
}
