//! The supported value space
//!
//! A [`Value`] is a node in a JSON-like tree, extended with an atomic
//! timestamp kind and an explicit marker for foreign values the system
//! refuses to decompose.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// A JSON-like value.
///
/// Mappings have unordered semantics: two mappings with the same entries are
/// equal regardless of how they were built. Lists are ordered. Timestamps are
/// atomic and never decomposed into fields.
///
/// `Unsupported` models an opaque runtime value (a handle, a symbolic token,
/// a foreign object) that carries only the name of its kind; canonicalizing
/// it fails with that name in the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Timestamp(DateTime<Utc>),
    List(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
    Unsupported(String),
}

/// The kind of a [`Value`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Timestamp,
    List,
    Mapping,
    Unsupported,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Timestamp => "timestamp",
            ValueKind::List => "list",
            ValueKind::Mapping => "mapping",
            ValueKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::List(_) => ValueKind::List,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Unsupported(_) => ValueKind::Unsupported,
        }
    }

    /// Build an `Unsupported` marker naming the foreign kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use candiff_core::{Value, ValueKind};
    ///
    /// let value = Value::unsupported("function");
    /// assert_eq!(value.kind(), ValueKind::Unsupported);
    /// ```
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Value::Unsupported(kind.into())
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Timestamps render to their wire string (see [`encode_timestamp`]).
    /// Returns `None` if the tree contains an `Unsupported` value.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => Some(serde_json::Value::Number(n.clone())),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Timestamp(ts) => Some(serde_json::Value::String(encode_timestamp(ts))),
            Value::List(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Mapping(entries) => entries
                .iter()
                .map(|(k, v)| v.to_json().map(|v| (k.clone(), v)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Value::Unsupported(_) => None,
        }
    }
}

/// The wire form of a timestamp: ISO-8601 with millisecond precision and the
/// UTC `Z` designator, e.g. `2021-05-24T15:44:00.000Z`.
pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
