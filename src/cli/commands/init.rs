use anyhow::{Result, bail};
use circ_lib::Library;

use crate::cli::Context;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if a snapshot already exists at the target path or the
/// file cannot be written.
pub fn execute(ctx: &Context) -> Result<()> {
    if ctx.file.exists() {
        bail!("{} already exists; refusing to overwrite", ctx.file.display());
    }

    let library = Library::new();
    library.save_to(&ctx.file)?;

    println!("Initialized empty library at {}", ctx.file.display());
    Ok(())
}
