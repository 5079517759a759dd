//! Recursive removal of a directory tree.
//!
//! Children are removed before their parent and symbolic links are never
//! followed: a link is unlinked, its target is left alone. The first failure
//! stops the walk and is returned; whatever was already removed stays removed.

use crate::error::{BookError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

pub fn delete_tree(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path).map_err(|e| not_found_or_io(path, e))?;
    remove_entry(path, &meta.file_type())
}

fn remove_entry(path: &Path, file_type: &fs::FileType) -> Result<()> {
    if file_type.is_dir() {
        for entry in fs::read_dir(path).map_err(|e| log_failure(path, e))? {
            let entry = entry.map_err(|e| log_failure(path, e))?;
            let child_type = entry.file_type().map_err(|e| log_failure(path, e))?;
            remove_entry(&entry.path(), &child_type)?;
        }
        fs::remove_dir(path).map_err(|e| log_failure(path, e))
    } else {
        fs::remove_file(path).map_err(|e| log_failure(path, e))
    }
}

fn log_failure(path: &Path, err: io::Error) -> BookError {
    warn!(path = %path.display(), error = %err, "unable to remove entry");
    not_found_or_io(path, err)
}

fn not_found_or_io(path: &Path, err: io::Error) -> BookError {
    if err.kind() == io::ErrorKind::NotFound {
        BookError::NotFound(path.to_path_buf())
    } else {
        BookError::Io(err)
    }
}
