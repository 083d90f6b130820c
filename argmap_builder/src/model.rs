use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::constant::UNKNOWN_KEY;

/// The declared value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Values are passed through unchanged.
    String,
    /// Values are parsed as base-10 numeric literals.
    Number,
    /// The flag alone means `true`; an explicit value must be `true` or `false`.
    Boolean,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Number => write!(f, "number"),
            Kind::Boolean => write!(f, "boolean"),
        }
    }
}

/// A single coerced value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A [`Kind::String`] value.
    String(String),
    /// A [`Kind::Number`] value.
    Number(f64),
    /// A [`Kind::Boolean`] value.
    Boolean(bool),
}

impl Value {
    /// The string, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// The number, if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean, if this is a [`Value::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The kind this value was coerced into.
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Boolean(_) => Kind::Boolean,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

/// The parsed result for one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A single-valued option.
    Single(Value),
    /// A multiple (or lazy multiple) option, in encounter order.
    Multiple(Vec<Value>),
    /// A single-valued, non-boolean option that was given without a value.
    Empty,
}

impl OptionValue {
    /// The value, if this is an [`OptionValue::Single`].
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            OptionValue::Single(value) => Some(value),
            _ => None,
        }
    }

    /// The values, if this is an [`OptionValue::Multiple`].
    pub fn as_multiple(&self) -> Option<&[Value]> {
        match self {
            OptionValue::Multiple(values) => Some(values),
            _ => None,
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for OptionValue {
    fn from(values: Vec<V>) -> Self {
        OptionValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

/// The outcome of a successful parse.
///
/// Keys follow the schema declaration order, never the argument order.
/// Options that never appeared on the command line are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    options: IndexMap<String, OptionValue>,
    unknown: Vec<String>,
}

impl ParseResult {
    pub(crate) fn new(options: IndexMap<String, OptionValue>, unknown: Vec<String>) -> Self {
        Self { options, unknown }
    }

    /// Get the parsed value of an option by its (output) name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Whether the option appeared on the command line.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// The number of options present.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no options are present.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate the present options, in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The tokens that were not consumed (permissive modes only).
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Split into the option map and the unknown tokens.
    pub fn into_parts(self) -> (IndexMap<String, OptionValue>, Vec<String>) {
        (self.options, self.unknown)
    }

    /// Render as a JSON object; unknown tokens appear under `_unknown` when there are any.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for ParseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extra = usize::from(!self.unknown.is_empty());
        let mut map = serializer.serialize_map(Some(self.options.len() + extra))?;

        for (name, value) in &self.options {
            map.serialize_entry(name, value)?;
        }

        if !self.unknown.is_empty() {
            map.serialize_entry(UNKNOWN_KEY, &self.unknown)?;
        }

        map.end()
    }
}
