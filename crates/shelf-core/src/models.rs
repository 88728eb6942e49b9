//! Data models for Shelf
//!
//! Defines the `Book` record. A book has no identity of its own; the library
//! addresses it by position.

use serde::{Deserialize, Serialize};

/// A book on the reading list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Book title
    pub title: String,
    /// Author name, free text
    pub author: String,
    /// Page count. Not validated, so zero and negative values are kept as given.
    pub pages: i64,
    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    /// Create a new book
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: i64, read: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            read,
        }
    }

    /// Flip the read flag
    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    /// One-line description, e.g. `1984 by George Orwell, 328 pages, not read yet`
    pub fn describe(&self) -> String {
        let status = if self.read {
            "already read"
        } else {
            "not read yet"
        };
        format!(
            "{} by {}, {} pages, {}",
            self.title, self.author, self.pages, status
        )
    }

    /// Short status label shown on a book card
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Not Read"
        }
    }

    /// Label for the action that toggles the read flag
    pub fn toggle_label(&self) -> &'static str {
        if self.read {
            "Mark as Unread"
        } else {
            "Mark as Read"
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
