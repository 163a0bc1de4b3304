//! Error types for canonical encoding

use thiserror::Error;

/// Errors that can occur during canonicalization
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("don't know how to canonize a value of kind '{0}'")]
    UnsupportedKind(String),
}
