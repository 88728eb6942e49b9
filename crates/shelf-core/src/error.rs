//! Library error handling
//!
//! The library has a single failure mode: addressing a position that does not
//! hold a book. A failed call leaves the library unchanged.

use thiserror::Error;

/// Errors that can occur during library operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Index does not address a book
    #[error("Invalid book index {index}: library holds {len} book(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl LibraryError {
    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LibraryError::IndexOutOfRange { len: 0, .. } => {
                "The library is empty. Add a book first."
            }
            LibraryError::IndexOutOfRange { .. } => {
                "Refresh the list; positions shift down after a removal."
            }
        }
    }
}

/// Result type for library operations
pub type LibraryResult<T> = Result<T, LibraryError>;
