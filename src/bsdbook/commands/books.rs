use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.list_books();
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_books(books))
}
