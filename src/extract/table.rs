// src/extract/table.rs
use std::fmt;

use crate::config::consts::{CELL_SEP, ROW_SEP};

/// Extracted tab/newline grid. Row widths are not checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedTable(String);

impl NormalizedTable {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn row_count(&self) -> usize {
        if self.0.is_empty() { 0 } else { self.0.split(ROW_SEP).count() }
    }

    /// Split for display. Borrowed cells, no unquoting.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        if self.0.is_empty() {
            return Vec::new();
        }
        self.0
            .split(ROW_SEP)
            .map(|line| line.split(CELL_SEP).collect())
            .collect()
    }

    /// Widest row; preview tables size their columns from this.
    pub fn max_columns(&self) -> usize {
        self.rows().iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

impl fmt::Display for NormalizedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
