//! Error types shared across the workspace.
//!
//! Each port reports its own typed error. None of these are ever surfaced
//! to the page: the controller logs them and degrades.

/// A string that is not a serialized [`Theme`](crate::theme::Theme).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme {value:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}

/// Failure of the preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage capability exists in this environment.
    #[error("preference storage is unavailable")]
    Unavailable,

    /// Reading a key failed.
    #[error("failed to read preference {key:?}: {reason}")]
    Read { key: String, reason: String },

    /// Writing a key failed (quota, private mode, ...).
    #[error("failed to write preference {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Failure of the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The document has no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The root element refused the attribute.
    #[error("failed to set attribute {name:?}: {reason}")]
    Attribute { name: String, reason: String },

    /// A listener could not be attached to a control.
    #[error("failed to attach {event:?} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
