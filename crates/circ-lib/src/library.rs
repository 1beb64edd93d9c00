//! The lending engine.
//!
//! [`Library`] owns the catalog, the member directory, and the transaction
//! log, and is the sole mutator of book/member cross-references and the sole
//! writer to the log. It is a plain context object: no globals, any number
//! of independent instances (tests rely on this).
//!
//! All operations are synchronous and complete fully (state mutation plus
//! log append) before returning; nothing here is safe to interleave.

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LendError, Result};
use crate::ledger::TransactionLog;
use crate::model::{Book, Hold, Member, Transaction, TransactionKind};
use crate::registry::Registry;
use crate::snapshot;

/// Standard loan period in days, applied to issues and renewals.
pub const DEFAULT_LOAN_PERIOD_DAYS: i64 = 14;

/// A library's full circulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    catalog: Registry<Book>,
    members: Registry<Member>,
    log: TransactionLog,
    loan_period_days: i64,
    next_member_seq: u64,
    #[serde(skip)]
    snapshot_path: Option<PathBuf>,
}

impl Library {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty library with the standard loan period.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Registry::new(),
            members: Registry::new(),
            log: TransactionLog::new(),
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            next_member_seq: 0,
            snapshot_path: None,
        }
    }

    /// Create a library with a non-standard loan period.
    #[must_use]
    pub fn with_loan_period(days: i64) -> Self {
        Self {
            loan_period_days: days,
            ..Self::new()
        }
    }

    /// Load a library from a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if there is no snapshot at `path`, or
    /// `SnapshotParse` if it cannot be decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut library = snapshot::load(path)?;
        library.snapshot_path = Some(path.to_path_buf());
        Ok(library)
    }

    /// Save to the file the library was opened from.
    ///
    /// # Errors
    ///
    /// Returns `OperationFailed` if no path is remembered, or `Io` on write
    /// failure. Persistence failures never disturb the in-memory state.
    pub fn save(&self) -> Result<()> {
        let path = self.snapshot_path.as_ref().ok_or(LendError::OperationFailed)?;
        snapshot::save(path, self)
    }

    /// Save to a specific file path.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        snapshot::save(path.as_ref(), self)
    }

    /// Remember `path` as the snapshot target for future `save()` calls.
    pub fn set_snapshot_path(&mut self, path: impl Into<PathBuf>) {
        self.snapshot_path = Some(path.into());
    }

    // ========================================================================
    // Membership and catalog
    // ========================================================================

    /// Enroll a new member. The ID is generated by the engine.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the generated ID clashes (cannot happen with
    /// the sequence intact; surfaced because the directory contract can fail).
    pub fn add_member(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Member> {
        self.next_member_seq += 1;
        let member = Member {
            id: format!("m-{}", self.next_member_seq),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        };
        if !self.members.insert(member.clone()) {
            return Err(LendError::DuplicateId {
                id: member.id.clone(),
            });
        }
        debug!(member = %member.id, "member added");
        Ok(member)
    }

    /// Add a book to the catalog under a caller-supplied ID.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if a book with that ID already exists.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Book> {
        let book = Book::new(title, author, id);
        if !self.catalog.insert(book.clone()) {
            return Err(LendError::DuplicateId { id: book.id });
        }
        debug!(book = %book.id, "book added");
        Ok(book)
    }

    /// Remove a book from the catalog.
    ///
    /// A book that is checked out or has pending holds cannot be removed.
    /// Check order: not-found, issued, has-hold.
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `BookIssued`, or `BookHasHold`.
    pub fn remove_book(&mut self, book_id: &str) -> Result<()> {
        let book = self
            .catalog
            .find(book_id)
            .ok_or_else(|| LendError::BookNotFound {
                id: book_id.to_string(),
            })?;
        if book.is_borrowed() {
            return Err(LendError::BookIssued {
                id: book_id.to_string(),
            });
        }
        if book.has_hold() {
            return Err(LendError::BookHasHold {
                id: book_id.to_string(),
            });
        }
        self.catalog.remove(book_id);
        debug!(book = book_id, "book removed");
        Ok(())
    }

    // ========================================================================
    // Circulation
    // ========================================================================

    /// Issue a book to a member.
    ///
    /// Sets the borrower, computes `due = now + loan_period`, and records an
    /// Issue transaction. A book with pending holds may be issued directly
    /// to any member, holder or not; the observed contract has no guard
    /// here and this engine preserves it.
    ///
    /// # Errors
    ///
    /// `MemberNotFound`, `BookNotFound`, or `AlreadyBorrowed`.
    pub fn issue_book(&mut self, member_id: &str, book_id: &str) -> Result<Book> {
        if !self.members.contains(member_id) {
            return Err(LendError::MemberNotFound {
                id: member_id.to_string(),
            });
        }
        let loan_days = self.loan_period_days;
        let book = self
            .catalog
            .find_mut(book_id)
            .ok_or_else(|| LendError::BookNotFound {
                id: book_id.to_string(),
            })?;
        if book.is_borrowed() {
            return Err(LendError::AlreadyBorrowed {
                id: book_id.to_string(),
            });
        }

        book.borrower = Some(member_id.to_string());
        book.due_date = Some(Utc::now() + Duration::days(loan_days));
        let issued = book.clone();

        self.log
            .record(TransactionKind::Issue, member_id, &issued.title);
        debug!(book = book_id, member = member_id, "book issued");
        Ok(issued)
    }

    /// Return a book.
    ///
    /// A book with a pending hold cannot simply go back to "available": the
    /// return is refused and the loan must be resolved through
    /// [`process_hold`](Self::process_hold) instead. Check order: not-found,
    /// not-issued, has-hold, complete.
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `BookNotIssued`, or `BookHasHold`.
    pub fn return_book(&mut self, book_id: &str) -> Result<()> {
        let book = self
            .catalog
            .find_mut(book_id)
            .ok_or_else(|| LendError::BookNotFound {
                id: book_id.to_string(),
            })?;
        let Some(borrower) = book.borrower.clone() else {
            return Err(LendError::BookNotIssued {
                id: book_id.to_string(),
            });
        };
        if book.has_hold() {
            return Err(LendError::BookHasHold {
                id: book_id.to_string(),
            });
        }

        book.borrower = None;
        book.due_date = None;
        let title = book.title.clone();

        self.log.record(TransactionKind::Return, &borrower, &title);
        debug!(book = book_id, member = %borrower, "book returned");
        Ok(())
    }

    /// Renew a loan for its current borrower.
    ///
    /// A hold on the book takes precedence over the borrower's right to
    /// extend, regardless of who asks. The new due date is computed from
    /// the renewal date, not from the old due date.
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `MemberNotFound`, `BookHasHold`, `BookNotIssued`,
    /// or `NotCurrentBorrower`.
    pub fn renew_book(&mut self, book_id: &str, member_id: &str) -> Result<Book> {
        if !self.members.contains(member_id) {
            return Err(LendError::MemberNotFound {
                id: member_id.to_string(),
            });
        }
        let loan_days = self.loan_period_days;
        let book = self
            .catalog
            .find_mut(book_id)
            .ok_or_else(|| LendError::BookNotFound {
                id: book_id.to_string(),
            })?;
        if book.has_hold() {
            return Err(LendError::BookHasHold {
                id: book_id.to_string(),
            });
        }
        match book.borrower.as_deref() {
            None => {
                return Err(LendError::BookNotIssued {
                    id: book_id.to_string(),
                });
            }
            Some(current) if current != member_id => {
                return Err(LendError::NotCurrentBorrower {
                    book_id: book_id.to_string(),
                    member_id: member_id.to_string(),
                });
            }
            Some(_) => {}
        }

        book.due_date = Some(Utc::now() + Duration::days(loan_days));
        let renewed = book.clone();

        self.log
            .record(TransactionKind::Renew, member_id, &renewed.title);
        debug!(book = book_id, member = member_id, "loan renewed");
        Ok(renewed)
    }

    // ========================================================================
    // Holds
    // ========================================================================

    /// Place a hold on a currently-borrowed book.
    ///
    /// Holds on available books are meaningless and refused. The duration
    /// is caller-supplied and not validated; a member may hold the same
    /// book more than once (no guard in the observed contract). Check
    /// order: not-found, not-issued, no-such-member, placed.
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `BookNotIssued`, or `MemberNotFound`.
    pub fn place_hold(&mut self, member_id: &str, book_id: &str, duration_days: i64) -> Result<()> {
        let book = self
            .catalog
            .find_mut(book_id)
            .ok_or_else(|| LendError::BookNotFound {
                id: book_id.to_string(),
            })?;
        if !book.is_borrowed() {
            return Err(LendError::BookNotIssued {
                id: book_id.to_string(),
            });
        }
        if !self.members.contains(member_id) {
            return Err(LendError::MemberNotFound {
                id: member_id.to_string(),
            });
        }

        book.place_hold(Hold {
            member_id: member_id.to_string(),
            duration_days,
            placed_at: Utc::now(),
        });
        let title = book.title.clone();

        self.log
            .record(TransactionKind::HoldPlaced, member_id, &title);
        debug!(book = book_id, member = member_id, "hold placed");
        Ok(())
    }

    /// Remove a member's hold on a book.
    ///
    /// Removes the first matching queue entry only.
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `MemberNotFound`, or `OperationFailed` when the
    /// member has no hold on the book.
    pub fn remove_hold(&mut self, member_id: &str, book_id: &str) -> Result<()> {
        if !self.members.contains(member_id) {
            return Err(LendError::MemberNotFound {
                id: member_id.to_string(),
            });
        }
        let book = self
            .catalog
            .find_mut(book_id)
            .ok_or_else(|| LendError::BookNotFound {
                id: book_id.to_string(),
            })?;
        if !book.remove_hold(member_id) {
            return Err(LendError::OperationFailed);
        }
        let title = book.title.clone();

        self.log
            .record(TransactionKind::HoldRemoved, member_id, &title);
        debug!(book = book_id, member = member_id, "hold removed");
        Ok(())
    }

    /// Fulfill the next hold on a book.
    ///
    /// Pops front holds until one names a member still in the directory
    /// (stale holds are discarded in passing), then issues the book to that
    /// member with the hold's requested duration instead of the standard
    /// loan period. Returns the receiving member, or `None` when no valid
    /// holds remain. This is how a `BookHasHold` return is resolved into a
    /// fresh loan.
    ///
    /// # Errors
    ///
    /// `BookNotFound`.
    pub fn process_hold(&mut self, book_id: &str) -> Result<Option<Member>> {
        if !self.catalog.contains(book_id) {
            return Err(LendError::BookNotFound {
                id: book_id.to_string(),
            });
        }

        loop {
            let hold = {
                let book = self
                    .catalog
                    .find_mut(book_id)
                    .ok_or_else(|| LendError::BookNotFound {
                        id: book_id.to_string(),
                    })?;
                match book.pop_hold() {
                    Some(hold) => hold,
                    None => return Ok(None),
                }
            };

            let Some(member) = self.members.find(&hold.member_id).cloned() else {
                // Stale hold: the member is gone. Drop it and keep looking.
                debug!(book = book_id, member = %hold.member_id, "discarding stale hold");
                continue;
            };

            let book = self
                .catalog
                .find_mut(book_id)
                .ok_or_else(|| LendError::BookNotFound {
                    id: book_id.to_string(),
                })?;
            book.borrower = Some(member.id.clone());
            book.due_date = Some(Utc::now() + Duration::days(hold.duration_days));
            let title = book.title.clone();

            self.log
                .record(TransactionKind::HoldProcessed, &member.id, &title);
            debug!(book = book_id, member = %member.id, "hold processed");
            return Ok(Some(member));
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Books in the catalog, insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.catalog.iter()
    }

    /// Members in the directory, insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    #[must_use]
    pub fn find_book(&self, book_id: &str) -> Option<&Book> {
        self.catalog.find(book_id)
    }

    #[must_use]
    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.find(member_id)
    }

    /// Books currently checked out to a member. A catalog scan: the member
    /// record keeps no back-reference list.
    #[must_use]
    pub fn books_borrowed_by(&self, member_id: &str) -> Vec<&Book> {
        self.catalog
            .iter()
            .filter(|b| b.borrower.as_deref() == Some(member_id))
            .collect()
    }

    /// The full transaction log, chronological.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.log.iter()
    }

    /// A member's transactions on one calendar day, chronological.
    ///
    /// The iterator is lazy and may be requested again; an existing member
    /// with no matches yields an empty sequence.
    ///
    /// # Errors
    ///
    /// `MemberNotFound` when the member does not exist.
    pub fn transactions_on<'a>(
        &'a self,
        member_id: &'a str,
        date: NaiveDate,
    ) -> Result<impl Iterator<Item = &'a Transaction>> {
        if !self.members.contains(member_id) {
            return Err(LendError::MemberNotFound {
                id: member_id.to_string(),
            });
        }
        Ok(self.log.for_member_on(member_id, date))
    }

    /// Standard loan period for this library.
    #[must_use]
    pub const fn loan_period_days(&self) -> i64 {
        self.loan_period_days
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
