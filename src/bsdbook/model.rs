use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub notes_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
}

/// A file inside a book together with its modification time.
///
/// `name` is the file name as found on disk, extension included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub name: String,
    pub last_modified: DateTime<Local>,
}

impl NoteEntry {
    pub fn last_modified_display(&self) -> String {
        self.last_modified.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// One line of one note containing a searched tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch {
    pub book: String,
    pub note: String,
    /// 1-indexed
    pub line_number: usize,
    pub line: String,
}
