//! Append-only transaction log.
//!
//! Every successful lending operation appends exactly one entry; entries
//! are never mutated or removed for the life of the snapshot.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Transaction, TransactionKind};

/// The library's record of lending events, queryable by member and day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
    next_id: i64,
}

impl TransactionLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an entry for a lending event that just happened.
    pub fn record(&mut self, kind: TransactionKind, member_id: &str, book_title: &str) {
        let entry = Transaction {
            id: self.next_id,
            kind,
            member_id: member_id.to_string(),
            book_title: book_title.to_string(),
            occurred_at: Utc::now(),
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// All entries in chronological (append) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    /// Lazy iterator over `member_id`'s transactions on the given calendar
    /// day, in chronological order. Empty when there are no matches; the
    /// member-exists check is the engine's job.
    pub fn for_member_on<'a>(
        &'a self,
        member_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.entries
            .iter()
            .filter(move |t| t.member_id == member_id && t.occurred_at.date_naive() == date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_monotonic_ids() {
        let mut log = TransactionLog::new();
        log.record(TransactionKind::Issue, "m-1", "Dune");
        log.record(TransactionKind::Return, "m-1", "Dune");

        let ids: Vec<i64> = log.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_for_member_on_filters_member_and_day() {
        let mut log = TransactionLog::new();
        log.record(TransactionKind::Issue, "m-1", "Dune");
        log.record(TransactionKind::Issue, "m-2", "Emma");
        log.record(TransactionKind::Return, "m-1", "Dune");

        let today = Utc::now().date_naive();
        let kinds: Vec<TransactionKind> =
            log.for_member_on("m-1", today).map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TransactionKind::Issue, TransactionKind::Return]);

        let other_day = today.pred_opt().unwrap();
        assert_eq!(log.for_member_on("m-1", other_day).count(), 0);
    }

    #[test]
    fn test_for_member_on_is_restartable() {
        let mut log = TransactionLog::new();
        log.record(TransactionKind::Issue, "m-1", "Dune");

        let today = Utc::now().date_naive();
        assert_eq!(log.for_member_on("m-1", today).count(), 1);
        // Calling again yields the same sequence.
        assert_eq!(log.for_member_on("m-1", today).count(), 1);
    }
}
