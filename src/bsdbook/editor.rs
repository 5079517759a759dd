use crate::error::{BookError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

const FALLBACK_EDITORS: &[&str] = &["nvim", "vim", "vi", "nano"];

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Some(editor) = editor_from_env() {
        return Ok(editor);
    }

    for fallback in FALLBACK_EDITORS {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(BookError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

fn editor_from_env() -> Option<String> {
    ["EDITOR", "VISUAL"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|editor| !editor.trim().is_empty())
}

/// Opens a file in the user's editor and waits for it to close.
///
/// The editor command may carry arguments (`EDITOR="code --wait"`).
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| BookError::Api("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| BookError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(BookError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(())
}
