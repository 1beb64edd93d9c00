//! `circ-lib` — In-process library circulation engine.
//!
//! Models a small library's lending workflow: owned books, borrowers, due
//! dates, FIFO hold queues, and an append-only transaction log. State lives
//! in memory and persists via a single JSON snapshot file.
//!
//! # Quick Start
//!
//! ```no_run
//! use circ_lib::Library;
//!
//! let mut library = Library::new();
//! let member = library.add_member("Ann", "1 Oak St", "555-0100").unwrap();
//! library.add_book("Dune", "Frank Herbert", "b1").unwrap();
//!
//! let issued = library.issue_book(&member.id, "b1").unwrap();
//! println!("due {}", issued.due_date.unwrap());
//!
//! library.save_to("library.json").unwrap();
//! ```

pub mod error;
pub mod ledger;
pub mod library;
pub mod model;
pub mod registry;
pub mod snapshot;

pub use error::{LendError, Result};
pub use ledger::TransactionLog;
pub use library::{DEFAULT_LOAN_PERIOD_DAYS, Library};
pub use model::{Book, Hold, Member, Transaction, TransactionKind};
pub use registry::{Keyed, Registry};
