//! # BSDBook Architecture
//!
//! BSDBook keeps notes as plain files grouped into "books", which are plain
//! directories under a single root (`~/books` unless `BSDBOOK_ROOT` says
//! otherwise). There is no database and no index: the directory tree is the
//! catalog, so anything that edits those files directly stays in sync.
//!
//! The crate is a library with two clients on top of it: the `bsdbook` command
//! line tool and a small read-only HTTP gateway.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients: CLI (cli/, main.rs)       HTTP gateway (http/)    │
//! │  - terminal I/O, exit codes         - sockets, status codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, paths.rs, search.rs)                │
//! │  - DataStore trait, FileStore, recursive delete, tag scan   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP gateway talks to the storage layer directly; it only needs the
//! read side and maps store errors onto status codes itself.
//!
//! ## No I/O Assumptions in Core
//!
//! Below the clients, code takes Rust arguments and returns `Result` values.
//! It never prints and never exits. Diagnostics go through `tracing`; the
//! binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the filesystem implementation
//! - [`paths`]: Root resolution and name validation
//! - [`search`]: `#todo` / `#link` tag scanning
//! - [`http`]: The read-only HTTP gateway
//! - [`model`]: Book, note and tag match types
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod http;
pub mod model;
pub mod paths;
pub mod search;
pub mod store;
