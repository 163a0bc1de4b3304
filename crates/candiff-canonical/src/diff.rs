//! Set-style diffing of value sequences by canonical identity

use crate::canonical::canonize;
use crate::error::CanonicalError;
use candiff_core::Value;
use std::collections::{HashMap, HashSet};

/// The three-way partition produced by [`diff`].
///
/// Each sequence holds original (non-canonicalized) values, one
/// representative per distinct canonical identity, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    pub only_in_first: Vec<Value>,
    pub in_both: Vec<Value>,
    pub only_in_second: Vec<Value>,
}

/// Partition two value sequences by canonical identity.
///
/// Elements are compared by their canonical encoding, so mapping key order
/// never prevents a match while list order still does. Duplicates within an
/// input collapse to a single representative. When canonically-equal elements
/// appear with different original representations, the representative kept is
/// the last occurrence processed (all of `first`, then all of `second`).
///
/// # Errors
///
/// Propagates [`CanonicalError::UnsupportedKind`] from the first element that
/// fails to canonize; no partial result is returned.
///
/// # Example
///
/// ```rust
/// use candiff_canonical::diff;
/// use candiff_core::Value;
///
/// let first = [Value::from(serde_json::json!({"a": 7}))];
/// let second = [Value::from(serde_json::json!({"a": 7})), Value::from(serde_json::json!({"b": 8}))];
///
/// let result = diff(&first, &second).unwrap();
/// assert!(result.only_in_first.is_empty());
/// assert_eq!(result.in_both, vec![Value::from(serde_json::json!({"a": 7}))]);
/// assert_eq!(result.only_in_second, vec![Value::from(serde_json::json!({"b": 8}))]);
/// ```
pub fn diff(first: &[Value], second: &[Value]) -> Result<DiffResult, CanonicalError> {
    let mut representatives: HashMap<String, Value> = HashMap::new();
    let mut keys_first = Vec::with_capacity(first.len());
    let mut keys_second = Vec::with_capacity(second.len());

    for value in first {
        let key = canonize(value)?;
        representatives.insert(key.clone(), value.clone());
        keys_first.push(key);
    }
    for value in second {
        let key = canonize(value)?;
        representatives.insert(key.clone(), value.clone());
        keys_second.push(key);
    }

    let set_first: HashSet<&str> = keys_first.iter().map(String::as_str).collect();
    let set_second: HashSet<&str> = keys_second.iter().map(String::as_str).collect();

    let mut result = DiffResult::default();

    let mut seen = HashSet::new();
    for key in &keys_first {
        if !seen.insert(key.as_str()) {
            continue;
        }
        let original = representatives[key.as_str()].clone();
        if set_second.contains(key.as_str()) {
            result.in_both.push(original);
        } else {
            result.only_in_first.push(original);
        }
    }

    let mut seen = HashSet::new();
    for key in &keys_second {
        if !seen.insert(key.as_str()) {
            continue;
        }
        if !set_first.contains(key.as_str()) {
            result.only_in_second.push(representatives[key.as_str()].clone());
        }
    }

    Ok(result)
}
