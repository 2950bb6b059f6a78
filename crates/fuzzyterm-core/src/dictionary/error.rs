//! Dictionary error types

use thiserror::Error;

/// Errors that can occur while reading a term dictionary.
///
/// The matching core never catches or masks these; they propagate unchanged
/// to the caller, which owns any retry policy.
#[derive(Debug, Clone, Error)]
pub enum DictionaryError {
    /// The term source for a field cannot be opened or read
    #[error("term source unreadable for field '{field}': {detail}")]
    Unreadable { field: String, detail: String },

    /// The term source became unreadable mid-enumeration
    #[error("dictionary cursor failed: {0}")]
    Cursor(String),
}

/// Result type for dictionary operations
pub type DictResult<T> = Result<T, DictionaryError>;
