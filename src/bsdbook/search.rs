//! # Tag Search
//!
//! Tags are plain substrings such as `#todo` written anywhere in a note. The
//! search walks every book under the root and every regular file in each book
//! (not only files carrying the note extension), reading one line at a time.
//!
//! [`find_by_tag`] returns a lazy iterator: directories are opened and files
//! read only as matches are pulled. Traversal follows storage enumeration order.
//! Anything that cannot be opened is logged and skipped so a single unreadable
//! note never hides matches from the rest of the tree.

use crate::model::TagMatch;
use crate::paths::BookPaths;
use std::fs::{self, File, ReadDir};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

pub const TODO_TAG: &str = "#todo";
pub const LINK_TAG: &str = "#link";

pub fn find_by_tag(paths: &BookPaths, tag: &str) -> TagMatches {
    let books = match fs::read_dir(paths.root()) {
        Ok(books) => Some(books),
        Err(e) => {
            warn!(path = %paths.root().display(), error = %e, "unable to open books root");
            None
        }
    };
    TagMatches {
        tag: tag.to_string(),
        root: paths.root().display().to_string(),
        books,
        current_book: None,
        current_note: None,
    }
}

pub fn find_todos(paths: &BookPaths) -> TagMatches {
    find_by_tag(paths, TODO_TAG)
}

pub fn find_links(paths: &BookPaths) -> TagMatches {
    find_by_tag(paths, LINK_TAG)
}

pub struct TagMatches {
    tag: String,
    root: String,
    books: Option<ReadDir>,
    current_book: Option<(String, ReadDir)>,
    current_note: Option<NoteLines>,
}

struct NoteLines {
    book: String,
    note: String,
    reader: BufReader<File>,
    line_number: usize,
    buf: Vec<u8>,
}

impl NoteLines {
    fn next_match(&mut self, tag: &str) -> Option<TagMatch> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!(book = %self.book, note = %self.note, error = %e, "stopped reading note");
                    return None;
                }
            }
            self.line_number += 1;

            let line = String::from_utf8_lossy(&self.buf);
            if line.contains(tag) {
                return Some(TagMatch {
                    book: self.book.clone(),
                    note: self.note.clone(),
                    line_number: self.line_number,
                    line: line.trim_end_matches(['\n', '\r']).to_string(),
                });
            }
        }
    }
}

fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

impl TagMatches {
    /// Opens the next book directory, or returns false when the root is exhausted.
    fn advance_book(&mut self) -> bool {
        let Some(books) = self.books.as_mut() else {
            return false;
        };
        for entry in books.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(path = %self.root, error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !is_dir(&path) {
                continue;
            }
            match fs::read_dir(&path) {
                Ok(notes) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    self.current_book = Some((name, notes));
                    return true;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "unable to open book directory"),
            }
        }
        self.books = None;
        false
    }

    /// Opens the next readable file of the current book, or returns false when the book is exhausted.
    fn advance_note(&mut self) -> bool {
        let Some((book, notes)) = self.current_book.as_mut() else {
            return false;
        };
        for entry in notes.by_ref() {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if !is_file(&path) {
                continue;
            }
            match File::open(&path) {
                Ok(file) => {
                    self.current_note = Some(NoteLines {
                        book: book.clone(),
                        note: entry.file_name().to_string_lossy().into_owned(),
                        reader: BufReader::new(file),
                        line_number: 0,
                        buf: Vec::new(),
                    });
                    return true;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "unable to open note file"),
            }
        }
        self.current_book = None;
        false
    }
}

impl Iterator for TagMatches {
    type Item = TagMatch;

    fn next(&mut self) -> Option<TagMatch> {
        loop {
            if let Some(note) = self.current_note.as_mut() {
                if let Some(found) = note.next_match(&self.tag) {
                    return Some(found);
                }
                self.current_note = None;
            }
            if self.advance_note() {
                continue;
            }
            if !self.advance_book() {
                return None;
            }
        }
    }
}
