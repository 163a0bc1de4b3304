//! Canonical encoding of values

use crate::error::CanonicalError;
use candiff_core::{encode_timestamp, Value};
use std::fmt::Write as FmtWrite;

/// Encode a value to its canonical string.
///
/// # Rules
///
/// - Mapping entries sorted by key, ascending byte-wise
/// - Lists preserve order
/// - No whitespace
/// - Strings use JSON escaping
/// - Timestamps encode as quoted ISO-8601 UTC strings with milliseconds
///
/// Recursion depth is bounded only by input depth; there is no explicit
/// guard, so pathologically deep trees can exhaust the call stack.
///
/// # Errors
///
/// Returns [`CanonicalError::UnsupportedKind`] if the tree contains an
/// [`Value::Unsupported`] node, naming that node's kind.
///
/// # Example
///
/// ```rust
/// use candiff_canonical::canonize;
/// use candiff_core::Value;
///
/// let value = Value::from(serde_json::json!({"z": 1, "a": [true, null]}));
/// assert_eq!(canonize(&value).unwrap(), r#"{"a":[true,null],"z":1}"#);
/// ```
pub fn canonize(value: &Value) -> Result<String, CanonicalError> {
    let mut output = String::new();
    write_canonical_value(&mut output, value)?;
    Ok(output)
}

/// Write a value in canonical form
fn write_canonical_value(output: &mut String, value: &Value) -> Result<(), CanonicalError> {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => {
            // serde_json renders integers plainly and floats in their
            // shortest round-trippable decimal form; both are deterministic.
            output.push_str(&n.to_string());
        }
        Value::String(s) => write_canonical_string(output, s),
        Value::Timestamp(ts) => write_canonical_string(output, &encode_timestamp(ts)),
        Value::List(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_canonical_value(output, item)?;
            }
            output.push(']');
        }
        Value::Mapping(entries) => {
            // BTreeMap iterates keys in ascending byte order, which is
            // exactly the canonical entry order.
            output.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_canonical_string(output, key);
                output.push(':');
                write_canonical_value(output, item)?;
            }
            output.push('}');
        }
        Value::Unsupported(kind) => {
            return Err(CanonicalError::UnsupportedKind(kind.clone()));
        }
    }
    Ok(())
}

/// Write a string with JSON escaping
fn write_canonical_string(output: &mut String, s: &str) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                // Writing into a String cannot fail
                write!(output, "\\u{:04x}", c as u32).unwrap();
            }
            c => output.push(c),
        }
    }
    output.push('"');
}
