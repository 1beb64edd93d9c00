use anyhow::{Context as _, Result};
use chrono::{NaiveDate, Utc};
use circ_lib::Transaction;

use crate::cli::{Context, TransactionsArgs};
use crate::format;

use super::open_library;

/// Execute the transactions command.
///
/// # Errors
///
/// Returns an error if the member is unknown or the date cannot be parsed.
pub fn execute(ctx: &Context, args: &TransactionsArgs) -> Result<()> {
    let library = open_library(ctx)?;

    let date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?,
        None => Utc::now().date_naive(),
    };

    let entries: Vec<&Transaction> = library.transactions_on(&args.member_id, date)?.collect();

    if ctx.json {
        format::print_json(&entries)?;
    } else if entries.is_empty() {
        println!("No transactions for {} on {date}", args.member_id);
    } else {
        for entry in entries {
            println!("{}", format::format_transaction_line(entry));
        }
    }
    Ok(())
}
