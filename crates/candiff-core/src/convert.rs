//! Conversions between [`Value`] and the serde data model

use crate::value::{encode_timestamp, Value};
use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Mapping(entries)
    }
}

impl Serialize for Value {
    /// Serializes like the JSON it models. Timestamps serialize as their wire
    /// string; `Unsupported` values refuse to serialize.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => serializer.serialize_str(&encode_timestamp(ts)),
            Value::List(items) => items.serialize(serializer),
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Unsupported(kind) => Err(S::Error::custom(format!(
                "cannot serialize a value of unsupported kind '{kind}'"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    /// Deserialization never produces `Timestamp` or `Unsupported`; date-like
    /// strings stay strings.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_covers_all_kinds() {
        let value = Value::from(json!({"a": null, "b": [true, 7, "x"]}));
        let Value::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        assert_eq!(entries["a"], Value::Null);
        assert_eq!(
            entries["b"],
            Value::List(vec![Value::Bool(true), Value::from(7_i64), Value::from("x")])
        );
    }

    #[test]
    fn test_serialize_timestamp_as_wire_string() {
        let ts = Utc.with_ymd_and_hms(2021, 5, 24, 15, 44, 0).unwrap();
        let out = serde_json::to_string(&Value::Timestamp(ts)).unwrap();
        assert_eq!(out, r#""2021-05-24T15:44:00.000Z""#);
    }

    #[test]
    fn test_serialize_unsupported_fails() {
        let result = serde_json::to_string(&Value::unsupported("big-integer"));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("big-integer"));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let value: Value = serde_json::from_str(r#"{"b": [1, 2], "a": "x"}"#).unwrap();
        assert_eq!(value, Value::from(json!({"a": "x", "b": [1, 2]})));
    }
}
