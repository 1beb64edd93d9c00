//! `circ_rust` - Circulation tracker front end
//!
//! This crate provides the `circ` CLI on top of the `circ-lib` engine.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//!
//! The engine itself (entities, lending rules, hold queues, transaction
//! log, snapshot persistence) lives in `circ-lib`; this crate only parses
//! input, calls one engine operation per invocation, and renders results.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod format;
pub mod logging;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
