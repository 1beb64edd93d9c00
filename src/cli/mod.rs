//! Command-line interface for `circ_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! Every subcommand performs one engine operation against the snapshot
//! file named by `--file` (or `CIRC_FILE`).

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::logging;

/// `circ_rust` (circ) - Small-library circulation tracker.
#[derive(Parser, Debug)]
#[command(name = "circ")]
#[command(
    author,
    version,
    about = "Small-library circulation tracker (lending, holds, JSON snapshot)",
    long_about = None
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Snapshot file holding the library state
    #[arg(
        long,
        global = true,
        env = "CIRC_FILE",
        default_value = "library.json"
    )]
    pub file: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty library snapshot
    Init,

    /// Enroll a new member
    AddMember(AddMemberArgs),

    /// Add a book to the catalog
    AddBook(AddBookArgs),

    /// Issue a book to a member
    Issue(IssueArgs),

    /// Return a book
    #[command(name = "return")]
    Return(ReturnArgs),

    /// Renew a loan for its current borrower
    Renew(RenewArgs),

    /// Remove a book from the catalog
    RemoveBook(RemoveBookArgs),

    /// Manage holds
    Hold(HoldCommand),

    /// List a member's transactions for one day
    Transactions(TransactionsArgs),

    /// List all books
    Books,

    /// List all members
    Members,

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct AddMemberArgs {
    /// Member name
    pub name: String,

    /// Street address
    pub address: String,

    /// Phone number
    pub phone: String,
}

#[derive(Args, Debug)]
pub struct AddBookArgs {
    /// Book title
    pub title: String,

    /// Author
    pub author: String,

    /// Catalog id (must be unique)
    pub id: String,
}

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Member id (e.g. m-1)
    pub member_id: String,

    /// Book id
    pub book_id: String,
}

#[derive(Args, Debug)]
pub struct ReturnArgs {
    /// Book id
    pub book_id: String,
}

#[derive(Args, Debug)]
pub struct RenewArgs {
    /// Book id
    pub book_id: String,

    /// Member id of the current borrower
    pub member_id: String,
}

#[derive(Args, Debug)]
pub struct RemoveBookArgs {
    /// Book id
    pub book_id: String,
}

#[derive(Args, Debug)]
pub struct HoldCommand {
    /// Hold subcommand
    #[command(subcommand)]
    pub command: HoldSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum HoldSubcommand {
    /// Place a hold on a currently-borrowed book
    Place(PlaceHoldArgs),

    /// Remove a member's hold on a book
    Remove(RemoveHoldArgs),

    /// Fulfill the next hold on a book
    Process(ProcessHoldArgs),
}

#[derive(Args, Debug)]
pub struct PlaceHoldArgs {
    /// Member id
    pub member_id: String,

    /// Book id
    pub book_id: String,

    /// Requested loan duration in days when the hold is fulfilled
    #[arg(long, default_value_t = circ_lib::DEFAULT_LOAN_PERIOD_DAYS)]
    pub days: i64,
}

#[derive(Args, Debug)]
pub struct RemoveHoldArgs {
    /// Member id
    pub member_id: String,

    /// Book id
    pub book_id: String,
}

#[derive(Args, Debug)]
pub struct ProcessHoldArgs {
    /// Book id
    pub book_id: String,
}

#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// Member id
    pub member_id: String,

    /// Calendar day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Shared per-invocation settings handed to every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Snapshot file path.
    pub file: PathBuf,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let ctx = Context {
        file: cli.file,
        json: cli.json,
    };
    tracing::debug!(file = %ctx.file.display(), "dispatching command");

    match cli.command {
        Commands::Init => commands::init::execute(&ctx),
        Commands::AddMember(args) => commands::add_member::execute(&ctx, &args),
        Commands::AddBook(args) => commands::add_book::execute(&ctx, &args),
        Commands::Issue(args) => commands::issue::execute(&ctx, &args),
        Commands::Return(args) => commands::return_book::execute(&ctx, &args),
        Commands::Renew(args) => commands::renew::execute(&ctx, &args),
        Commands::RemoveBook(args) => commands::remove_book::execute(&ctx, &args),
        Commands::Hold(hold) => match hold.command {
            HoldSubcommand::Place(args) => commands::hold::place(&ctx, &args),
            HoldSubcommand::Remove(args) => commands::hold::remove(&ctx, &args),
            HoldSubcommand::Process(args) => commands::hold::process(&ctx, &args),
        },
        Commands::Transactions(args) => commands::transactions::execute(&ctx, &args),
        Commands::Books => commands::books::execute(&ctx),
        Commands::Members => commands::members::execute(&ctx),
        Commands::Version => {
            println!("circ {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
