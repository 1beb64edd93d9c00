use anyhow::Result;

use crate::cli::{AddBookArgs, Context};
use crate::format;

use super::open_library;

/// Execute the add-book command.
///
/// # Errors
///
/// Returns an error on a duplicate catalog id or a persistence failure.
pub fn execute(ctx: &Context, args: &AddBookArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    let book = library.add_book(&args.title, &args.author, &args.id)?;
    library.save()?;

    if ctx.json {
        format::print_json(&book)?;
    } else {
        println!("Added {}", format::format_book_line(&book));
    }
    Ok(())
}
