use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::paths::BookPaths;
use std::fs;

pub fn run(paths: &BookPaths) -> Result<CmdResult> {
    let root = paths.root();
    let mut result = CmdResult::default();

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {
            result.add_message(CmdMessage::warning(format!(
                "Books directory already exists at {}",
                root.display()
            )));
        }
        Ok(_) => {
            return Err(BookError::Api(format!(
                "{} exists but is not a directory",
                root.display()
            )));
        }
        Err(_) => {
            fs::create_dir_all(root)?;
            result.add_message(CmdMessage::success(format!(
                "Created books directory at {}",
                root.display()
            )));
        }
    }

    Ok(result)
}
