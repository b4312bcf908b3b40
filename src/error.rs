use thiserror::Error;

/// Errors surfaced at the session boundary.
///
/// The toolbar and document layers never perform I/O and never produce these;
/// everything here comes from loading, parsing, saving, or mounting.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The referenced drawing file does not exist in the store.
    #[error("drawing not found: {0}")]
    NotFound(String),

    /// Read or write failure at the file store.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored content does not parse as a drawing document.
    #[error("not a valid drawing document: {0}")]
    InvalidFormat(String),

    /// No valid insertion point for the editor surface or embed reference.
    #[error("no valid insertion point")]
    NoParent,
}

pub type Result<T> = std::result::Result<T, EditorError>;
