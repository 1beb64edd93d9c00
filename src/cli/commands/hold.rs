//! Hold subcommands: place, remove, process.

use anyhow::Result;

use crate::cli::{Context, PlaceHoldArgs, ProcessHoldArgs, RemoveHoldArgs};
use crate::format;

use super::open_library;

/// Place a hold on a currently-borrowed book.
///
/// # Errors
///
/// Returns an error if the book is unknown or not checked out, the member
/// is unknown, or the snapshot cannot be saved.
pub fn place(ctx: &Context, args: &PlaceHoldArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    library.place_hold(&args.member_id, &args.book_id, args.days)?;
    library.save()?;

    println!("Hold placed for {} on {}", args.member_id, args.book_id);
    Ok(())
}

/// Remove a member's hold on a book.
///
/// # Errors
///
/// Returns an error if the book or member is unknown, the member has no
/// hold on the book, or the snapshot cannot be saved.
pub fn remove(ctx: &Context, args: &RemoveHoldArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    library.remove_hold(&args.member_id, &args.book_id)?;
    library.save()?;

    println!("Hold removed");
    Ok(())
}

/// Fulfill the next hold on a book.
///
/// # Errors
///
/// Returns an error if the book is unknown or the snapshot cannot be saved.
pub fn process(ctx: &Context, args: &ProcessHoldArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    let receiver = library.process_hold(&args.book_id)?;
    library.save()?;

    match receiver {
        Some(member) if ctx.json => format::print_json(&member)?,
        Some(member) => println!("Issued {} to {} ({})", args.book_id, member.name, member.id),
        None => println!("No valid holds left on {}", args.book_id),
    }
    Ok(())
}
