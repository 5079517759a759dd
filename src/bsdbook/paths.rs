//! # Path Resolution
//!
//! Every book and note path is derived here from a single root directory that is
//! resolved once at startup and then passed around as a [`BookPaths`] value.
//!
//! ```text
//! <root>/                     # default: <home>/books, or $BSDBOOK_ROOT
//! ├── config.json
//! ├── work/                   # a book
//! │   ├── todo.bdsb           # a note
//! │   └── ideas.bdsb
//! └── life/
//!     └── errands.bdsb
//! ```
//!
//! Names coming from users (CLI arguments, HTTP paths) are validated before they
//! are joined onto the root, so no resolved path can escape it.

use crate::error::{BookError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const ROOT_ENV_VAR: &str = "BSDBOOK_ROOT";
pub const BOOKS_DIR_NAME: &str = "books";
pub const DEFAULT_NOTE_EXT: &str = ".bdsb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPaths {
    root: PathBuf,
    note_ext: String,
}

impl BookPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            note_ext: DEFAULT_NOTE_EXT.to_string(),
        }
    }

    pub fn with_note_ext(mut self, ext: &str) -> Self {
        self.note_ext = normalize_ext(ext);
        self
    }

    /// Root under the user's home directory: `<home>/books`.
    pub fn from_home() -> Result<Self> {
        let base = BaseDirs::new().ok_or(BookError::HomeUnresolved)?;
        Ok(Self::new(base.home_dir().join(BOOKS_DIR_NAME)))
    }

    /// `$BSDBOOK_ROOT` when set and non-empty, otherwise [`BookPaths::from_home`].
    pub fn resolve() -> Result<Self> {
        match std::env::var_os(ROOT_ENV_VAR) {
            Some(root) if !root.is_empty() => Ok(Self::new(PathBuf::from(root))),
            _ => Self::from_home(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn note_ext(&self) -> &str {
        &self.note_ext
    }

    pub fn book_dir(&self, book: &str) -> Result<PathBuf> {
        validate_name(book)?;
        Ok(self.root.join(book))
    }

    pub fn note_file(&self, book: &str, note: &str) -> Result<PathBuf> {
        validate_name(note)?;
        Ok(self.book_dir(book)?.join(self.note_filename(note)))
    }

    pub fn note_filename(&self, note: &str) -> String {
        format!("{}{}", note, self.note_ext)
    }

    /// Strips the note extension from a file name, or `None` if it doesn't carry it.
    pub fn note_name_from_file<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.note_ext.as_str())
            .filter(|stem| !stem.is_empty())
    }
}

/// Rejects names that are empty, are `.`/`..`, or contain a path separator or NUL.
pub fn validate_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(BookError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
