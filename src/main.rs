//! `circ_rust` (circ) - Small-library circulation tracker
//!
//! Tracks a library's books, members, loans, holds, and transaction history
//! against a single JSON snapshot file. No daemon, no background processes.

use circ_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
