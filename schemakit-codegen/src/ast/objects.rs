//! TypeScript/JavaScript object literal builder.

use super::{ArrowFn, Call, JsArray, Value};
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: Value,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.value.to_fragments_with(&format!("{}: ", self.key), ",")
    }
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Every property, including the last, is followed by a comma.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .push(Property::new(key, Value::String(value.into())));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::new(key, Value::Raw(value.into())));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Add an array property.
    pub fn array(mut self, key: impl Into<String>, value: JsArray) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Add a property whose value is a function call.
    pub fn call(mut self, key: impl Into<String>, value: Call) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Add an arrow function property.
    pub fn arrow_fn(mut self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Conditionally add a string property using an Option.
    pub fn string_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.string(key, v),
            None => self,
        }
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn property_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .flat_map(Property::to_fragments)
            .collect()
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        Value::Object(self.clone()).to_fragments_with("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}\n");
    }

    #[test]
    fn test_object_with_string_and_raw() {
        let obj = JsObject::new()
            .string("name", "title")
            .raw("hidden", "true")
            .build();
        assert_eq!(obj, "{\n  name: 'title',\n  hidden: true,\n}\n");
    }

    #[test]
    fn test_nested_object() {
        let inner = JsObject::new().string("source", "title");
        let outer = JsObject::new().string("name", "slug").object("options", inner);
        assert_eq!(
            outer.build(),
            "{\n  name: 'slug',\n  options: {\n    source: 'title',\n  },\n}\n"
        );
    }

    #[test]
    fn test_conditional_string() {
        let obj = JsObject::new()
            .string("name", "test")
            .string_opt("description", Some("A description"))
            .string_opt("missing", None::<&str>)
            .build();
        assert!(obj.contains("description: 'A description',"));
        assert!(!obj.contains("missing"));
    }
}
