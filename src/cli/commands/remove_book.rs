use anyhow::Result;

use crate::cli::{Context, RemoveBookArgs};

use super::open_library;

/// Execute the remove-book command.
///
/// # Errors
///
/// Returns an error if the book is unknown, currently checked out, has a
/// pending hold, or the snapshot cannot be saved.
pub fn execute(ctx: &Context, args: &RemoveBookArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    library.remove_book(&args.book_id)?;
    library.save()?;

    println!("Book has been removed");
    Ok(())
}
