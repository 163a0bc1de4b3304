//! # Candiff Canonical
//!
//! Deterministic canonical encoding of JSON-like values, and the set-style
//! differ and hashing built on it.
//!
//! This crate provides:
//! - Canonical encoding with sorted mapping keys ([`canonize`])
//! - Set partitioning of two value sequences by canonical identity ([`diff`])
//! - SHA256 hashing of canonical encodings ([`hash_canonical`])
//!
//! ## Canonical Encoding Rules
//!
//! 1. Mapping entries sorted by key, ascending byte-wise
//! 2. Lists preserve order
//! 3. No whitespace
//! 4. Timestamps encode as quoted ISO-8601 UTC strings with milliseconds
//! 5. Unsupported kinds fail with the kind's name
//!
//! Two values canonize to the same string exactly when they are structurally
//! equal, ignoring mapping key order. That makes the canonical string usable
//! as a stand-in for deep equality and as a set or map key.
//!
//! ## Example
//!
//! ```rust
//! use candiff_canonical::{canonize, diff};
//! use candiff_core::Value;
//!
//! let a = Value::from(serde_json::json!({"b": 8, "a": 7}));
//! let b = Value::from(serde_json::json!({"a": 7, "b": 8}));
//! assert_eq!(canonize(&a).unwrap(), r#"{"a":7,"b":8}"#);
//! assert_eq!(canonize(&a).unwrap(), canonize(&b).unwrap());
//!
//! let result = diff(&[a], &[b]).unwrap();
//! assert!(result.only_in_first.is_empty());
//! assert_eq!(result.in_both.len(), 1);
//! ```

mod canonical;
mod diff;
mod error;
mod hash;

pub use canonical::*;
pub use diff::*;
pub use error::*;
pub use hash::*;
