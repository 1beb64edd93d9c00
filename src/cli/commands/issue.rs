use anyhow::Result;

use crate::cli::{Context, IssueArgs};
use crate::format;

use super::open_library;

/// Execute the issue command.
///
/// # Errors
///
/// Returns an error if the member or book is unknown, the book is already
/// checked out, or the snapshot cannot be saved.
pub fn execute(ctx: &Context, args: &IssueArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    let book = library.issue_book(&args.member_id, &args.book_id)?;
    library.save()?;

    if ctx.json {
        format::print_json(&book)?;
    } else {
        // Due date is always set right after a successful issue.
        let due = book.due_date.map_or_else(String::new, format::format_date);
        println!("Issued {} to {}, due {due}", book.title, args.member_id);
    }
    Ok(())
}
