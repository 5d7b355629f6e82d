// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::core::RawDocument;
use crate::error::AppError;
use crate::extract::NormalizedTable;

/// Read the whole input page. Bytes are decoded lossily.
pub fn read_document(path: &Path) -> Result<RawDocument, AppError> {
    let bytes = fs::read(path).map_err(|e| AppError::io("read", path, e))?;
    Ok(RawDocument::from_bytes(&bytes))
}

/// Overwrite `path` with the table text. Parent dirs are created.
pub fn write_table(path: &Path, table: &NormalizedTable) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|e| AppError::io("create directory", parent, e))?;
        }
    }
    fs::write(path, table.as_str()).map_err(|e| AppError::io("write", path, e))
}

/// A trailing separator or an existing directory means "put output.txt in here".
pub fn resolve_out_path(user_o: &str) -> PathBuf {
    let p = PathBuf::from(normalize_separators(user_o.trim()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        p.join(DEFAULT_OUT_FILE)
    } else {
        p
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
