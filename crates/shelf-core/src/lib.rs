//! Shelf Core Library
//!
//! This crate provides the core functionality for Shelf, a personal
//! book-tracking list: add books, list them, remove them, and mark them as
//! read or unread.
//!
//! # Architecture
//!
//! - **Library**: the ordered, in-memory collection of books. Books are
//!   addressed by their position, and positions stay contiguous after every
//!   removal.
//!
//! Nothing is persisted. A library lives as long as the process that owns it.
//!
//! # Quick Start
//!
//! ```
//! use shelf_core::Library;
//!
//! let mut library = Library::new();
//! library.add("1984", "George Orwell", 328, false);
//! library.add("The Hobbit", "J.R.R. Tolkien", 295, true);
//!
//! library.toggle_read_at(0)?;
//! let hobbit = library.find_by_title_substring("hob");
//! assert_eq!(hobbit.map(|b| b.author.as_str()), Some("J.R.R. Tolkien"));
//! # Ok::<(), shelf_core::LibraryError>(())
//! ```
//!
//! # Modules
//!
//! - `library`: The book collection and its mutation operations (main entry point)
//! - `models`: The `Book` record
//! - `error`: Library error types
//! - `samples`: The sample catalogue used to seed a new session
//! - `pages`: Lenient integer coercion for page counts typed by a user
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod pages;
pub mod samples;

pub use config::Config;
pub use error::{LibraryError, LibraryResult};
pub use library::Library;
pub use models::Book;
