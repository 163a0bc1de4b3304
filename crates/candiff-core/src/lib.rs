//! # Candiff Core
//!
//! Value model shared by the canonicalizer and the set differ.
//!
//! This crate provides:
//! - [`Value`], a closed sum type over the supported value kinds
//! - [`ValueKind`] for runtime diagnostics
//! - Conversions to and from `serde_json::Value` and `chrono` timestamps
//!
//! ## Example
//!
//! ```rust
//! use candiff_core::Value;
//!
//! let value = Value::from(serde_json::json!({"b": 8, "a": 7}));
//! let same = Value::from(serde_json::json!({"a": 7, "b": 8}));
//!
//! // Mapping key order is not part of value identity
//! assert_eq!(value, same);
//! ```

pub mod convert;
pub mod value;

pub use value::*;
