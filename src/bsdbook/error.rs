use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Note not found: {book}/{note}")]
    NoteNotFound { book: String, note: String },

    #[error("Book directory does not exist: {0}")]
    BookMissing(String),

    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unable to determine the home directory")]
    HomeUnresolved,

    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl BookError {
    /// True for every "the thing you asked for is not there" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BookError::BookNotFound(_)
                | BookError::NoteNotFound { .. }
                | BookError::BookMissing(_)
                | BookError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
