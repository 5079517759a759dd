//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between business logic and persistence.
//! Commands, the API facade and the HTTP gateway are generic over it; the
//! production implementation is [`fs::FileStore`], which keeps the directory
//! tree itself as the catalog:
//!
//! ```text
//! <root>/
//! ├── <book>/              # one directory per book
//! │   └── <note><ext>      # one file per note, raw bytes
//! └── config.json
//! ```
//!
//! There is no manifest or index file. Listing a book means reading its
//! directory; listing all books means reading the root.
//!
//! ## Concurrency
//!
//! No locking is done. Two processes working on the same root can race on
//! creation and deletion. Note creation is create-exclusive and book creation
//! relies on `mkdir` being atomic, so neither can silently overwrite, but a
//! delete running alongside a listing may still produce a partial view.

use crate::error::Result;
use crate::model::{Book, NoteEntry};
use crate::paths::BookPaths;
use std::path::PathBuf;

pub mod fs;
pub mod tree;

/// Abstract interface for book and note storage.
pub trait DataStore {
    fn paths(&self) -> &BookPaths;

    // --- Books ---

    /// Names of every book, in storage enumeration order.
    /// An unreadable root yields an empty list, not an error.
    fn list_books(&self) -> Vec<String>;

    /// Every book with its note count.
    fn list_books_detailed(&self) -> Vec<Book>;

    fn create_book(&self, name: &str) -> Result<PathBuf>;

    fn delete_book(&self, name: &str) -> Result<()>;

    // --- Notes ---

    /// Note names (extension stripped) of one book.
    fn list_notes(&self, book: &str) -> Result<Vec<String>>;

    /// Every regular file in the book with its modification time.
    fn list_notes_with_timestamps(&self, book: &str) -> Result<Vec<NoteEntry>>;

    fn create_note(&self, book: &str, name: &str) -> Result<PathBuf>;

    fn read_note_content(&self, book: &str, name: &str) -> Result<Vec<u8>>;

    fn delete_note(&self, book: &str, name: &str) -> Result<()>;

    /// Location of a note, whether or not it exists yet.
    fn note_path(&self, book: &str, name: &str) -> Result<PathBuf>;
}
