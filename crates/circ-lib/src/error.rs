//! Error types for `circ-lib`.
//!
//! One closed enum covers the whole engine surface so every caller sees the
//! full enumeration of result codes; nothing collapses to a boolean.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for circulation operations.
#[derive(Error, Debug)]
pub enum LendError {
    // === Lookup failures ===
    /// Member with the specified ID is not in the directory.
    #[error("No such member: {id}")]
    MemberNotFound { id: String },

    /// Book with the specified ID is not in the catalog.
    #[error("No such book in library: {id}")]
    BookNotFound { id: String },

    /// Attempted to add a book with an ID already in the catalog.
    #[error("Duplicate id: {id}")]
    DuplicateId { id: String },

    // === Lending state ===
    /// Issue refused: the book already has a borrower.
    #[error("Book {id} is already checked out")]
    AlreadyBorrowed { id: String },

    /// The book exists but has no current borrower.
    #[error("Book {id} is not checked out")]
    BookNotIssued { id: String },

    /// Removal refused: the book is currently checked out.
    #[error("Book {id} is currently checked out")]
    BookIssued { id: String },

    /// The book has a pending hold; plain return, renewal, and removal are
    /// refused until the hold is processed or removed.
    #[error("Book {id} has a hold")]
    BookHasHold { id: String },

    /// Renewal requested by someone other than the current borrower.
    #[error("Book {book_id} is not checked out to member {member_id}")]
    NotCurrentBorrower { book_id: String, member_id: String },

    /// Catch-all operation failure (e.g. removing a hold that was never
    /// placed).
    #[error("Operation failed")]
    OperationFailed,

    // === Parsing ===
    /// Unknown transaction kind string in a snapshot.
    #[error("Invalid transaction kind: {kind}")]
    InvalidTransactionKind { kind: String },

    // === Persistence ===
    /// No snapshot file at the specified path.
    #[error("Snapshot not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Snapshot file exists but could not be decoded.
    #[error("Snapshot parse error: {reason}")]
    SnapshotParse { reason: String },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `LendError`.
pub type Result<T> = std::result::Result<T, LendError>;
