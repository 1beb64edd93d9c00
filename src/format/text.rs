//! Text formatting functions for `circ_rust`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Circulation status icons (○ ● ◐)
//! - Book, member, and transaction line formatting

use chrono::{DateTime, Utc};
use circ_lib::{Book, Member, Transaction};

/// Status icon characters.
pub mod icons {
    /// On the shelf, no borrower.
    pub const AVAILABLE: &str = "○";
    /// Checked out.
    pub const BORROWED: &str = "●";
    /// Checked out with at least one pending hold.
    pub const HELD: &str = "◐";
}

/// Return the icon character for a book's circulation state.
#[must_use]
pub fn format_status_icon(book: &Book) -> &'static str {
    match (book.is_borrowed(), book.has_hold()) {
        (true, true) => icons::HELD,
        (true, false) => icons::BORROWED,
        // A hold on an unborrowed book only appears transiently between a
        // hold-process pop and reissue; render it as available.
        (false, _) => icons::AVAILABLE,
    }
}

/// Format a timestamp as its calendar day (YYYY-MM-DD).
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.date_naive().to_string()
}

/// Format a single-line book summary.
///
/// Format: `{icon} {id} {title} by {author}` plus loan and hold details.
#[must_use]
pub fn format_book_line(book: &Book) -> String {
    let mut line = format!(
        "{} {} {} by {}",
        format_status_icon(book),
        book.id,
        book.title,
        book.author
    );
    if let (Some(borrower), Some(due)) = (&book.borrower, book.due_date) {
        line.push_str(&format!(" — out to {borrower}, due {}", format_date(due)));
    }
    if book.has_hold() {
        line.push_str(&format!(" [{} hold(s)]", book.holds.len()));
    }
    line
}

/// Format a single-line member summary.
#[must_use]
pub fn format_member_line(member: &Member) -> String {
    format!(
        "{} {} ({}, {})",
        member.id, member.name, member.address, member.phone
    )
}

/// Format a single-line transaction summary.
#[must_use]
pub fn format_transaction_line(txn: &Transaction) -> String {
    format!(
        "{} {:<14} {} ({})",
        format_date(txn.occurred_at),
        txn.kind.as_str(),
        txn.book_title,
        txn.member_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_book_line_states() {
        let mut book = Book::new("Dune", "Herbert", "b1");
        assert!(format_book_line(&book).starts_with(icons::AVAILABLE));

        book.borrower = Some("m-1".to_string());
        book.due_date = Some(Utc::now() + Duration::days(14));
        let line = format_book_line(&book);
        assert!(line.starts_with(icons::BORROWED));
        assert!(line.contains("out to m-1"));

        book.place_hold(circ_lib::Hold {
            member_id: "m-2".to_string(),
            duration_days: 7,
            placed_at: Utc::now(),
        });
        let line = format_book_line(&book);
        assert!(line.starts_with(icons::HELD));
        assert!(line.contains("[1 hold(s)]"));
    }

    #[test]
    fn test_member_line() {
        let member = Member {
            id: "m-1".to_string(),
            name: "Ann".to_string(),
            address: "1 Oak St".to_string(),
            phone: "555-0100".to_string(),
        };
        assert_eq!(format_member_line(&member), "m-1 Ann (1 Oak St, 555-0100)");
    }
}
