use crate::commands::CmdResult;
use crate::error::{BookError, Result};
use crate::store::DataStore;

/// Resolves the file of an existing note, for handing to an editor.
pub fn run<S: DataStore>(store: &S, book: &str, note: &str) -> Result<CmdResult> {
    let path = store.note_path(book, note)?;
    if !path.is_file() {
        return Err(BookError::NoteNotFound {
            book: book.to_string(),
            note: note.to_string(),
        });
    }
    Ok(CmdResult::default().with_note_paths(vec![path]))
}
