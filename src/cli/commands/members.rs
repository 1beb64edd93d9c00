use anyhow::Result;
use circ_lib::Member;

use crate::cli::Context;
use crate::format;

use super::open_library;

/// Execute the members command: list the directory in insertion order.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be opened.
pub fn execute(ctx: &Context) -> Result<()> {
    let library = open_library(ctx)?;

    if ctx.json {
        let members: Vec<&Member> = library.members().collect();
        format::print_json(&members)?;
        return Ok(());
    }

    for member in library.members() {
        println!("{}", format::format_member_line(member));
        for book in library.books_borrowed_by(&member.id) {
            println!("    {}", format::format_book_line(book));
        }
    }
    Ok(())
}
