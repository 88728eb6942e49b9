//! Sample catalogue
//!
//! A fresh session can start with a handful of well-known books so the
//! interface has something to show.

use crate::library::Library;

/// Sample books as (title, author, pages, read), in seeding order
pub const SAMPLE_BOOKS: &[(&str, &str, i64, bool)] = &[
    ("The Hobbit", "J.R.R. Tolkien", 295, true),
    ("1984", "George Orwell", 328, false),
    ("To Kill a Mockingbird", "Harper Lee", 281, true),
    ("Nhân học", "Claude Lévi-Strauss", 155, true),
    ("The Great Gatsby", "F. Scott Fitzgerald", 180, false),
    ("Brave New World", "Aldous Huxley", 268, true),
    ("Fahrenheit 451", "Ray Bradbury", 158, false),
    ("The Catcher in the Rye", "J.D. Salinger", 277, true),
    ("Pride and Prejudice", "Jane Austen", 279, false),
];

/// Append every sample book to `library`
pub fn seed(library: &mut Library) {
    for &(title, author, pages, read) in SAMPLE_BOOKS {
        library.add(title, author, pages, read);
    }
}
