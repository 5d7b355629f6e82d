// src/error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::fetch::FetchError;

/// Everything a single run can fail with. Frontends turn these into a
/// message box (GUI) or an eyre report (CLI).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(&'static str),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("could not {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Usage(String),
}

impl AppError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io { action, path: path.into(), source }
    }
}
