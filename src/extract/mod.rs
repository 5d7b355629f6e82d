// src/extract/mod.rs
//
// Pure extraction: RawDocument text → NormalizedTable text.
// Locates the data block with fixed anchors (first match only) and
// turns the table markup between them into tab/newline text.

use std::fmt;
use thiserror::Error;

mod policy;
mod table;

pub use policy::{MatchPolicy, SubstitutionRule};
pub use table::NormalizedTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => f.write_str("start"),
            Anchor::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("{0} marker not found; is this a saved RTINGS page with the chart table?")]
    AnchorNotFound(Anchor),
    #[error("end marker (byte {end}) does not come after start marker (byte {start})")]
    AnchorOrderInvalid { start: usize, end: usize },
}

/// Extract with the RTINGS policy.
pub fn extract(raw: &str) -> Result<NormalizedTable, ExtractionError> {
    MatchPolicy::rtings().extract(raw)
}
