//! Output formatting for `circ_rust`.
//!
//! Supports human-readable text output and machine-parseable JSON. All
//! engine types serialize directly, so `--json` just pretty-prints them.

mod text;

use anyhow::Result;
use serde::Serialize;

pub use text::{
    format_book_line, format_date, format_member_line, format_status_icon,
    format_transaction_line,
};

/// Pretty-print a serializable value to stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
