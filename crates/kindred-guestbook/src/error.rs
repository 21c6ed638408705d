//! Error types for guestbook operations

use thiserror::Error;

/// Errors that can occur while loading or reading a guestbook
#[derive(Error, Debug)]
pub enum GuestbookError {
    /// Failed to read the data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file is not valid guestbook JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share an identifier
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// "entry" or "deceased"
        kind: &'static str,
        /// The repeated identifier
        id: String,
    },
}
