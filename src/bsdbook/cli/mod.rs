//! # CLI Layer
//!
//! One client of the bsdbook library. This is the only place that parses
//! arguments, writes to the terminal, installs the log subscriber or decides
//! the exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `print`: rendering of `CmdResult` data for the terminal

mod commands;
mod print;
mod setup;

pub use commands::run;
