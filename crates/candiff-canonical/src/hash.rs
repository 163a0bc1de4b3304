//! SHA256 hashing of canonical encodings

use crate::canonical::canonize;
use crate::error::CanonicalError;
use candiff_core::Value;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Hash raw bytes with SHA256, returning a 64-character lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex_encode(&hasher.finalize())
}

/// Hash a string with SHA256. The string is treated as UTF-8 bytes.
pub fn hash_string(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

/// Canonize a value and hash the result.
///
/// Because the input is canonized first, two values that differ only in
/// mapping key order hash identically.
///
/// # Errors
///
/// Returns [`CanonicalError::UnsupportedKind`] if canonicalization fails.
///
/// # Example
///
/// ```rust
/// use candiff_canonical::hash_canonical;
/// use candiff_core::Value;
///
/// let a = Value::from(serde_json::json!({"b": 1, "a": 2}));
/// let b = Value::from(serde_json::json!({"a": 2, "b": 1}));
/// assert_eq!(hash_canonical(&a).unwrap(), hash_canonical(&b).unwrap());
/// ```
pub fn hash_canonical(value: &Value) -> Result<String, CanonicalError> {
    let canonical = canonize(value)?;
    Ok(hash_string(&canonical))
}

/// Convert bytes to lowercase hex
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}
