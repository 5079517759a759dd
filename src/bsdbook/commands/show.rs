use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, book: &str) -> Result<CmdResult> {
    let entries = store.list_notes_with_timestamps(book)?;
    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!("Book '{}' has no notes.", book)));
    }
    Ok(result.with_note_entries(entries))
}
