use anyhow::Result;

use crate::cli::{Context, ReturnArgs};

use super::open_library;

/// Execute the return command.
///
/// A book with a pending hold refuses a plain return; the loan resolves
/// through `circ hold process` instead.
///
/// # Errors
///
/// Returns an error if the book is unknown, not checked out, has a pending
/// hold, or the snapshot cannot be saved.
pub fn execute(ctx: &Context, args: &ReturnArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    library.return_book(&args.book_id)?;
    library.save()?;

    println!("Book has been returned");
    Ok(())
}
