use crate::config::BookConfig;
use crate::model::{NoteEntry, TagMatch};
use std::path::PathBuf;

pub mod books;
pub mod config;
pub mod create;
pub mod delete;
pub mod install;
pub mod paths;
pub mod show;
pub mod tags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<String>,
    pub note_entries: Vec<NoteEntry>,
    pub tag_matches: Vec<TagMatch>,
    pub note_paths: Vec<PathBuf>,
    pub config: Option<BookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<String>) -> Self {
        self.books = books;
        self
    }

    pub fn with_note_entries(mut self, entries: Vec<NoteEntry>) -> Self {
        self.note_entries = entries;
        self
    }

    pub fn with_tag_matches(mut self, matches: Vec<TagMatch>) -> Self {
        self.tag_matches = matches;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }

    pub fn with_config(mut self, config: BookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
