use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::find_by_tag;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, tag: &str) -> Result<CmdResult> {
    let matches: Vec<_> = find_by_tag(store.paths(), tag).collect();
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No lines tagged {}.", tag)));
    }
    Ok(result.with_tag_matches(matches))
}
