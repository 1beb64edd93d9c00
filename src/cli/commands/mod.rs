//! Command implementations.
//!
//! Each command opens the snapshot, performs one engine operation, saves,
//! and prints. The engine never does I/O; everything user-facing lives here.

pub mod add_book;
pub mod add_member;
pub mod books;
pub mod hold;
pub mod init;
pub mod issue;
pub mod members;
pub mod remove_book;
pub mod renew;
pub mod return_book;
pub mod transactions;

use anyhow::{Context as _, Result};
use circ_lib::{LendError, Library};

use crate::cli::Context;

/// Open the library snapshot named by the context.
///
/// # Errors
///
/// A missing snapshot gets a hint to run `circ init`; other failures are
/// passed through with the file path attached.
pub fn open_library(ctx: &Context) -> Result<Library> {
    match Library::open(&ctx.file) {
        Ok(library) => Ok(library),
        Err(LendError::FileNotFound { path }) => Err(anyhow::anyhow!(
            "no library snapshot at {}; run `circ init` first",
            path.display()
        )),
        Err(e) => {
            Err(anyhow::Error::new(e)).with_context(|| format!("opening {}", ctx.file.display()))
        }
    }
}
