use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn book<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    store.delete_book(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book deleted: {}", name)));
    Ok(result)
}

pub fn note<S: DataStore>(store: &S, book: &str, name: &str) -> Result<CmdResult> {
    store.delete_note(book, name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted: {}/{}",
        book, name
    )));
    Ok(result)
}
