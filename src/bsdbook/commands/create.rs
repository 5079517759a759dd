use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn book<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let path = store.create_book(name)?;
    let mut result = CmdResult::default().with_note_paths(vec![path]);
    result.add_message(CmdMessage::success(format!("Book created: {}", name)));
    Ok(result)
}

pub fn note<S: DataStore>(store: &S, book: &str, name: &str) -> Result<CmdResult> {
    let path = store.create_note(book, name)?;
    let mut result = CmdResult::default().with_note_paths(vec![path]);
    result.add_message(CmdMessage::success(format!(
        "Note created: {}/{}",
        book, name
    )));
    Ok(result)
}
