// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::extract::MatchPolicy;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub extract: MatchPolicy,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub headless: bool,
    /// Explicit Chromium binary; None lets chromiumoxide search for one.
    pub chrome_path: Option<PathBuf>,
    /// DOM must stay unchanged this long to count as settled.
    pub settle_ms: u64,
    pub poll_ms: u64,
    pub max_settle_ms: u64,
    /// Where the rendered page is parked; None uses the system temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_path: None,
            settle_ms: SETTLE_MS,
            poll_ms: POLL_MS,
            max_settle_ms: MAX_SETTLE_MS,
            temp_dir: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: default_out_path() }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Parse GUI/CLI text into a path. Empty text keeps the current one.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_path = PathBuf::from(crate::file::normalize_separators(s));
        }
    }
}

/// `<Desktop>/output.txt`, else `<home>/output.txt`, else `./output.txt`.
pub fn default_out_path() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .map(|d| d.join(DEFAULT_OUT_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE))
}
