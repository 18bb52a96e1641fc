//! Typed default values.
//!
//! `defaultProps` entries are classified once when the namespace document is
//! ingested, so the renderer can dispatch on a closed set of variants.

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Key that tags an object as an opaque runtime value (function, symbol, ...).
pub const OPAQUE_KEY: &str = "$opaque";

/// A component's declared default value for one prop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DefaultValue {
    /// Numeric literal.
    Number(Number),
    /// Boolean literal.
    Bool(bool),
    /// String literal.
    String(String),
    /// A plain object, kept for JSON serialization.
    Object(Value),
    /// An embedded markup element (`type`, `key` and `ref` all present).
    Element,
    /// Anything without a literal form: functions, symbols, arrays, null.
    Other,
}

impl DefaultValue {
    /// Classify a JSON value.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::String(s) => Self::String(s.clone()),
            Value::Object(map) => {
                if map.contains_key(OPAQUE_KEY) {
                    Self::Other
                } else if is_element_like(map) {
                    Self::Element
                } else {
                    Self::Object(value.clone())
                }
            }
            // Arrays and null have no literal form in the generated markup.
            Value::Array(_) | Value::Null => Self::Other,
        }
    }
}

#[inline]
fn is_element_like(map: &serde_json::Map<String, Value>) -> bool {
    map.contains_key("type") && map.contains_key("key") && map.contains_key("ref")
}

/// Ordered mapping from prop name to its default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultProps(Vec<(String, DefaultValue)>);

impl DefaultProps {
    /// Build from a JSON object, preserving key order.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        Self(
            map.iter()
                .map(|(name, value)| (name.clone(), DefaultValue::from_json(value)))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&DefaultValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefaultValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, DefaultValue)> for DefaultProps {
    fn from_iter<I: IntoIterator<Item = (String, DefaultValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for DefaultProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(n, v)| (n, v)))
    }
}
