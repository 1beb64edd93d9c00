//! Core data types for circ-lib.
//!
//! Books carry their own hold queue; members are flat records. The only
//! cross-references are member-id strings resolved against the directory at
//! query time, never owned copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::registry::Keyed;

/// A book owned by the library.
///
/// `due_date` is present iff `borrower` is set. Holds are FIFO by placement
/// order; a book with pending holds refuses plain returns and renewals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique ID (caller-supplied at catalog insertion).
    pub id: String,

    pub title: String,

    pub author: String,

    /// Member ID of the current borrower, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrower: Option<String>,

    /// Due date of the current loan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Pending hold requests, front = next to be served.
    #[serde(default, skip_serializing_if = "VecDeque::is_empty")]
    pub holds: VecDeque<Hold>,
}

impl Book {
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            borrower: None,
            due_date: None,
            holds: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn is_borrowed(&self) -> bool {
        self.borrower.is_some()
    }

    #[must_use]
    pub fn has_hold(&self) -> bool {
        !self.holds.is_empty()
    }

    /// Append a hold to the tail of the queue.
    pub fn place_hold(&mut self, hold: Hold) {
        self.holds.push_back(hold);
    }

    /// Remove the first hold placed by `member_id`.
    ///
    /// Returns false if the member has no hold on this book. Duplicate
    /// holds by the same member are possible; only the first is removed.
    pub fn remove_hold(&mut self, member_id: &str) -> bool {
        if let Some(pos) = self.holds.iter().position(|h| h.member_id == member_id) {
            self.holds.remove(pos);
            true
        } else {
            false
        }
    }

    /// The next hold to be served, without removing it.
    #[must_use]
    pub fn peek_hold(&self) -> Option<&Hold> {
        self.holds.front()
    }

    /// Remove and return the front hold.
    pub fn pop_hold(&mut self) -> Option<Hold> {
        self.holds.pop_front()
    }
}

impl Keyed for Book {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A reservation on a currently-borrowed book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hold {
    /// Member waiting for the book.
    pub member_id: String,

    /// Requested loan duration in days, used instead of the standard loan
    /// period when the hold is fulfilled. Not validated against any bound.
    pub duration_days: i64,

    /// When the hold was placed.
    pub placed_at: DateTime<Utc>,
}

/// A library member.
///
/// Fields are immutable after creation; the engine never mutates members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    /// Unique ID (generated by the engine, e.g. "m-3").
    pub id: String,

    pub name: String,

    pub address: String,

    pub phone: String,
}

impl Keyed for Member {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Kind of lending event recorded in the transaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Issue,
    Return,
    Renew,
    HoldPlaced,
    HoldRemoved,
    HoldProcessed,
}

impl TransactionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Return => "return",
            Self::Renew => "renew",
            Self::HoldPlaced => "hold_placed",
            Self::HoldRemoved => "hold_removed",
            Self::HoldProcessed => "hold_processed",
        }
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = crate::error::LendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "issue" => Ok(Self::Issue),
            "return" => Ok(Self::Return),
            "renew" => Ok(Self::Renew),
            "hold_placed" => Ok(Self::HoldPlaced),
            "hold_removed" => Ok(Self::HoldRemoved),
            "hold_processed" => Ok(Self::HoldProcessed),
            other => Err(crate::error::LendError::InvalidTransactionKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// One entry in the transaction log. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub member_id: String,
    pub book_title: String,
    pub occurred_at: DateTime<Utc>,
}
