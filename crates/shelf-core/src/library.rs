//! Book collection
//!
//! `Library` owns an ordered list of books. Position is the only address a
//! book has, so positions are always contiguous `0..len`: removing a book
//! shifts every later book down by one.
//!
//! Renderers must re-read positions from [`Library::entries`] after every
//! mutation. An index captured before a removal may point at a different
//! book, or at nothing, afterwards.

use tracing::{debug, info, warn};

use crate::error::{LibraryError, LibraryResult};
use crate::models::Book;

/// Ordered, in-memory collection of books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Append a new book and return it
    ///
    /// No validation is applied; `pages` is stored as given.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: i64,
        read: bool,
    ) -> &Book {
        let book = Book::new(title, author, pages, read);
        info!("Added: {}", book);
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    /// Current contents in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Books paired with their current position
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Book)> {
        self.books.iter().enumerate()
    }

    /// Book at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of books marked as read
    pub fn read_count(&self) -> usize {
        self.books.iter().filter(|book| book.read).count()
    }

    /// Remove the book at `index`, shifting later books down by one
    pub fn remove_at(&mut self, index: usize) -> LibraryResult<Book> {
        self.check_index(index)?;
        let removed = self.books.remove(index);
        info!("Removed: {}", removed);
        Ok(removed)
    }

    /// Flip the read flag of the book at `index`, returning the new value
    pub fn toggle_read_at(&mut self, index: usize) -> LibraryResult<bool> {
        self.check_index(index)?;
        let book = &mut self.books[index];
        book.toggle_read();
        debug!(index, read = book.read, "Toggled read status of '{}'", book.title);
        Ok(book.read)
    }

    /// First book whose title contains `query`, ignoring case
    ///
    /// Only the first match in insertion order is returned.
    pub fn find_by_title_substring(&self, query: &str) -> Option<&Book> {
        self.position_by_title_substring(query)
            .map(|index| &self.books[index])
    }

    /// Position of the first book whose title contains `query`, ignoring case
    pub fn position_by_title_substring(&self, query: &str) -> Option<usize> {
        let query = query.to_lowercase();
        let position = self
            .books
            .iter()
            .position(|book| book.title.to_lowercase().contains(&query));
        debug!(query = %query, ?position, "Title search");
        position
    }

    fn check_index(&self, index: usize) -> LibraryResult<()> {
        if index < self.books.len() {
            Ok(())
        } else {
            warn!(index, len = self.books.len(), "Invalid book index");
            Err(LibraryError::IndexOutOfRange {
                index,
                len: self.books.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_books() -> Library {
        let mut library = Library::new();
        library.add("1984", "Orwell", 328, false);
        library.add("The Hobbit", "Tolkien", 295, true);
        library
    }

    #[test]
    fn test_new_library_is_empty() {
        let library = Library::new();
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
        assert!(library.list().is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut library = Library::new();
        let added = library.add("1984", "Orwell", 328, false);
        assert_eq!(added.title, "1984");

        library.add("The Hobbit", "Tolkien", 295, true);

        let titles: Vec<_> = library.list().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["1984", "The Hobbit"]);
    }

    #[test]
    fn test_add_keeps_unvalidated_pages() {
        let mut library = Library::new();
        library.add("Zero", "A", 0, false);
        library.add("Negative", "B", -12, false);
        assert_eq!(library.list()[0].pages, 0);
        assert_eq!(library.list()[1].pages, -12);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut library = Library::new();
        library.add("Dune", "Herbert", 412, false);
        library.add("Dune", "Herbert", 412, false);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_len_tracks_adds_minus_removes() {
        let mut library = Library::new();
        for i in 0..5 {
            library.add(format!("Book {}", i), "Author", 100 + i, false);
        }
        library.remove_at(4).unwrap();
        library.remove_at(0).unwrap();
        assert!(library.remove_at(10).is_err());
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn test_remove_at_compacts() {
        let mut library = Library::new();
        library.add("A", "x", 1, false);
        library.add("B", "x", 2, false);
        library.add("C", "x", 3, false);

        let removed = library.remove_at(1).unwrap();
        assert_eq!(removed.title, "B");

        let entries: Vec<_> = library
            .entries()
            .map(|(i, b)| (i, b.title.clone()))
            .collect();
        assert_eq!(entries, vec![(0, "A".to_string()), (1, "C".to_string())]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut library = two_books();
        let err = library.remove_at(2).unwrap_err();
        assert_eq!(err, LibraryError::IndexOutOfRange { index: 2, len: 2 });

        // Library remains usable and unchanged
        assert_eq!(library.len(), 2);
        assert!(library.remove_at(1).is_ok());
    }

    #[test]
    fn test_empty_library_rejects_every_index() {
        let mut library = Library::new();
        for index in [0, 1, usize::MAX] {
            assert!(matches!(
                library.remove_at(index),
                Err(LibraryError::IndexOutOfRange { len: 0, .. })
            ));
            assert!(matches!(
                library.toggle_read_at(index),
                Err(LibraryError::IndexOutOfRange { len: 0, .. })
            ));
        }
    }

    #[test]
    fn test_toggle_read_at_is_involution() {
        let mut library = two_books();
        let original = library.list()[1].read;

        assert_eq!(library.toggle_read_at(1).unwrap(), !original);
        assert_eq!(library.toggle_read_at(1).unwrap(), original);
        assert_eq!(library.list()[1].read, original);
    }

    #[test]
    fn test_toggle_read_at_out_of_range() {
        let mut library = two_books();
        assert!(library.toggle_read_at(2).is_err());
        assert!(!library.list()[0].read);
        assert!(library.list()[1].read);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let library = two_books();
        let found = library.find_by_title_substring("HOBBIT").unwrap();
        assert_eq!(found.author, "Tolkien");
    }

    #[test]
    fn test_find_returns_first_match_only() {
        let mut library = Library::new();
        library.add("The Two Towers", "Tolkien", 352, false);
        library.add("The Return of the King", "Tolkien", 416, false);

        let found = library.find_by_title_substring("the").unwrap();
        assert_eq!(found.title, "The Two Towers");
        assert_eq!(library.position_by_title_substring("king"), Some(1));
    }

    #[test]
    fn test_find_no_match() {
        let library = two_books();
        assert!(library.find_by_title_substring("dune").is_none());
        assert!(library.position_by_title_substring("dune").is_none());
        assert!(Library::new().find_by_title_substring("").is_none());
    }

    #[test]
    fn test_read_count() {
        let mut library = two_books();
        assert_eq!(library.read_count(), 1);
        library.toggle_read_at(0).unwrap();
        assert_eq!(library.read_count(), 2);
    }

    #[test]
    fn test_orwell_tolkien_scenario() {
        let mut library = two_books();
        assert_eq!(library.list()[0], Book::new("1984", "Orwell", 328, false));
        assert_eq!(library.list()[1], Book::new("The Hobbit", "Tolkien", 295, true));

        library.toggle_read_at(0).unwrap();
        assert!(library.list()[0].read);

        library.remove_at(0).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.list()[0].title, "The Hobbit");

        let found = library.find_by_title_substring("hob").unwrap();
        assert_eq!(found, &library.list()[0]);
    }
}
