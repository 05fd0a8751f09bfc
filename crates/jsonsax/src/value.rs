//! A thin tree-building consumer layered on the event stream.
//!
//! The core parser never materializes values; this module folds the event
//! stream into a [`Value`] for callers that want a document tree.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ParseError;
use crate::parser;
use crate::sink::EventSink;

/// A materialized JSON value.
///
/// Object members keep document order, and duplicate keys are preserved
/// exactly as emitted; deduplication is the consumer's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The literal `null`.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// Any JSON number.
    Number(f64),
    /// A decoded string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An insertion-ordered sequence of key/value members.
    Object(Vec<(String, Value)>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

/// One open container while the tree is being folded.
#[derive(Debug)]
enum Scope {
    Array(Vec<Value>),
    Object {
        members: Vec<(String, Value)>,
        pending_key: Option<String>,
    },
}

/// An [`EventSink`] that folds the event stream into a [`Value`] tree.
///
/// ```rust
/// use jsonsax::{Value, ValueBuilder, parse};
///
/// let mut builder = ValueBuilder::new();
/// parse("[1, true]", &mut builder).unwrap();
/// assert_eq!(
///     builder.into_value(),
///     Some(Value::Array(vec![Value::Number(1.0), Value::Boolean(true)]))
/// );
/// ```
#[derive(Debug, Default)]
pub struct ValueBuilder {
    scopes: Vec<Scope>,
    root: Option<Value>,
}

impl ValueBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished root value, if a parse ran to completion.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.root
    }

    fn place(&mut self, value: Value) {
        match self.scopes.last_mut() {
            Some(Scope::Array(items)) => items.push(value),
            Some(Scope::Object {
                members,
                pending_key,
            }) => {
                if let Some(key) = pending_key.take() {
                    members.push((key, value));
                }
            }
            None => self.root = Some(value),
        }
    }
}

impl EventSink for ValueBuilder {
    fn on_null(&mut self) {
        self.place(Value::Null);
    }

    fn on_boolean(&mut self, value: bool) {
        self.place(Value::Boolean(value));
    }

    fn on_number(&mut self, value: f64) {
        self.place(Value::Number(value));
    }

    fn on_string(&mut self, value: &[u8]) {
        self.place(Value::String(String::from_utf8_lossy(value).into_owned()));
    }

    fn on_object_start(&mut self) {
        self.scopes.push(Scope::Object {
            members: Vec::new(),
            pending_key: None,
        });
    }

    fn on_object_key(&mut self, key: &[u8]) {
        if let Some(Scope::Object { pending_key, .. }) = self.scopes.last_mut() {
            *pending_key = Some(String::from_utf8_lossy(key).into_owned());
        }
    }

    fn on_object_end(&mut self) {
        if let Some(Scope::Object { members, .. }) = self.scopes.pop() {
            self.place(Value::Object(members));
        }
    }

    fn on_array_start(&mut self) {
        self.scopes.push(Scope::Array(Vec::new()));
    }

    fn on_array_end(&mut self) {
        if let Some(Scope::Array(items)) = self.scopes.pop() {
            self.place(Value::Array(items));
        }
    }
}

/// Parse `source` and materialize the document as a [`Value`] tree.
///
/// # Errors
///
/// Returns the first [`ParseError`] found, with 1-based line and column.
///
/// # Examples
///
/// ```rust
/// use jsonsax::{Value, parse_value};
///
/// let value = parse_value(r#"{"name": "ada"}"#).unwrap();
/// assert_eq!(
///     value,
///     Value::Object(vec![("name".into(), Value::String("ada".into()))])
/// );
/// ```
pub fn parse_value(source: &str) -> Result<Value, ParseError> {
    let mut builder = ValueBuilder::new();
    parser::parse(source, &mut builder)?;
    Ok(builder.into_value().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Value, parse_value};
    use crate::error::ErrorKind;

    #[test]
    fn scalars() {
        assert_eq!(parse_value("null").unwrap(), Value::Null);
        assert_eq!(parse_value("true").unwrap(), Value::Boolean(true));
        assert_eq!(parse_value("-2.5e2").unwrap(), Value::Number(-250.0));
        assert_eq!(
            parse_value(r#""hi""#).unwrap(),
            Value::String("hi".into())
        );
    }

    #[test]
    fn nested_document() {
        let value = parse_value(r#"{"a": 1, "b": [2, 3]}"#).unwrap();
        assert_eq!(
            value,
            Value::Object(vec![
                ("a".into(), Value::Number(1.0)),
                (
                    "b".into(),
                    Value::Array(vec![Value::Number(2.0), Value::Number(3.0)])
                ),
            ])
        );
    }

    #[test]
    fn members_keep_document_order_and_duplicates() {
        let value = parse_value(r#"{"k": 1, "a": 2, "k": 3}"#).unwrap();
        assert_eq!(
            value,
            Value::Object(vec![
                ("k".into(), Value::Number(1.0)),
                ("a".into(), Value::Number(2.0)),
                ("k".into(), Value::Number(3.0)),
            ])
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(parse_value("[]").unwrap(), Value::Array(vec![]));
        assert_eq!(parse_value("{}").unwrap(), Value::Object(vec![]));
    }

    #[test]
    fn no_partial_tree_on_error() {
        let err = parse_value(r#"{"a": [1, 2"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEnd);
    }
}
