// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{ShortlistError, ShortlistResult};

/// Write `contents` to `path`, creating missing parent directories.
/// Whole-file write: the target is either fully replaced or the call fails.
pub fn write_text(path: &Path, contents: &str) -> ShortlistResult<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ShortlistError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> ShortlistResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ShortlistError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ShortlistError::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
