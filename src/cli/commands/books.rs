use anyhow::Result;
use circ_lib::Book;

use crate::cli::Context;
use crate::format;

use super::open_library;

/// Execute the books command: list the catalog in insertion order.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be opened.
pub fn execute(ctx: &Context) -> Result<()> {
    let library = open_library(ctx)?;

    if ctx.json {
        let books: Vec<&Book> = library.books().collect();
        format::print_json(&books)?;
        return Ok(());
    }

    for book in library.books() {
        println!("{}", format::format_book_line(book));
    }
    Ok(())
}
