//! Book command handlers
//!
//! Each invocation works on the session library built at start-up, so these
//! commands only read it.

use anyhow::{bail, Result};

use shelf_core::Library;

use crate::output::Output;

/// List every book in the session library
pub fn list(library: &Library, output: &Output) -> Result<()> {
    output.print_library(library.list())
}

/// Show the first book whose title contains `query`
pub fn find(library: &Library, query: String, output: &Output) -> Result<()> {
    match library.find_by_title_substring(&query) {
        Some(book) => output.print_book(book),
        None => bail!("No book matching '{}'", query),
    }
}
