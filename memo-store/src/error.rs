//! Error types for memo-store

use thiserror::Error;

/// Errors that can occur in the memo store
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error (unreadable directory, unwritable file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No stored memo matches the given identifier
    #[error("Unknown memo identifier '{0}'")]
    NotFound(String),

    /// More than one stored memo matches the given identifier
    #[error("Identifier '{identifier}' matches {count} memos; use a longer hash prefix or the exact title")]
    Ambiguous { identifier: String, count: usize },

    /// Memo title is empty after trimming
    #[error("Memo title must not be empty")]
    EmptyTitle,

    /// External editor failed to produce content
    #[error("Editor error: {0}")]
    Editor(String),

    /// Interactive input failed
    #[error("Input error: {0}")]
    Input(String),
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound(identifier.into())
    }

    /// Create an ambiguous identifier error
    pub fn ambiguous(identifier: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            identifier: identifier.into(),
            count,
        }
    }

    /// Create an editor error
    pub fn editor(msg: impl Into<String>) -> Self {
        Self::Editor(msg.into())
    }

    /// Create an input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
