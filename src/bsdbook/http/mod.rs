//! # HTTP Gateway
//!
//! A read-only HTTP/1.1 view of the book store, built on `std::net` with no
//! framework underneath. Each connection carries exactly one request:
//!
//! ```text
//! accept ─▶ read request head ─▶ parse request line ─▶ route ─▶ write response ─▶ close
//! ```
//!
//! Only the request line is looked at; headers and bodies are ignored. Routes:
//!
//! - `GET /books`: every book with its note count, as JSON.
//! - `GET /books/<book>`: the notes of one book, as JSON.
//! - `GET /book/<book>/<note>`: the raw bytes of one note, as `text/plain`.
//!
//! Store errors become status codes (400, 404, 500) and a response is always
//! written before the connection is closed. Connections are served one at a
//! time.

pub mod request;
pub mod response;
pub mod router;
pub mod server;

pub use response::{Response, Status};
pub use router::{handle_request, route};
pub use server::HttpServer;
