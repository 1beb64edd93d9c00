use anyhow::Result;

use crate::cli::{AddMemberArgs, Context};
use crate::format;

use super::open_library;

/// Execute the add-member command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be opened or saved.
pub fn execute(ctx: &Context, args: &AddMemberArgs) -> Result<()> {
    let mut library = open_library(ctx)?;

    let member = library.add_member(&args.name, &args.address, &args.phone)?;
    library.save()?;

    if ctx.json {
        format::print_json(&member)?;
    } else {
        println!("Added member {}", format::format_member_line(&member));
    }
    Ok(())
}
