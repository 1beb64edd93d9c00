use anyhow::Result;

use crate::cli::{Context, RenewArgs};
use crate::format;

use super::open_library;

/// Execute the renew command.
///
/// # Errors
///
/// Returns an error if the book has a hold (holds take precedence over
/// renewal), the caller is not the current borrower, or persistence fails.
pub fn execute(ctx: &Context, args: &RenewArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    let book = library.renew_book(&args.book_id, &args.member_id)?;
    library.save()?;

    if ctx.json {
        format::print_json(&book)?;
    } else {
        let due = book.due_date.map_or_else(String::new, format::format_date);
        println!("Renewed {}, now due {due}", book.title);
    }
    Ok(())
}
