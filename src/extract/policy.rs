// src/extract/policy.rs
//
// Anchors + ordered substitutions that describe one page template.

use crate::config::consts::*;

use super::{Anchor, ExtractionError, NormalizedTable};

/// One literal find → replace pair. Applied as a global replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub find: String,
    pub replace: String,
}

impl SubstitutionRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self { find: find.into(), replace: replace.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchPolicy {
    pub start: String,
    pub end: String,
    pub rules: Vec<SubstitutionRule>,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::rtings()
    }
}

impl MatchPolicy {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into(), rules: Vec::new() }
    }

    /// Builder-style: append a rule after the existing ones.
    pub fn rule(mut self, find: impl Into<String>, replace: impl Into<String>) -> Self {
        self.rules.push(SubstitutionRule::new(find, replace));
        self
    }

    /// The RTINGS frequency-response table.
    pub fn rtings() -> Self {
        Self::new(START_ANCHOR, END_ANCHOR)
            .rule(CELL_MARKER, CELL_SEP)
            .rule(ROW_MARKER, ROW_SEP)
    }

    /// Slice out the text between the first START and the first END.
    pub fn segment<'a>(&self, raw: &'a str) -> Result<&'a str, ExtractionError> {
        let start = raw
            .find(&self.start)
            .ok_or(ExtractionError::AnchorNotFound(Anchor::Start))?;
        let end = raw
            .find(&self.end)
            .ok_or(ExtractionError::AnchorNotFound(Anchor::End))?;

        let seg_start = start + self.start.len();
        // END must begin after START does, and not inside the START match.
        if end <= start || end < seg_start {
            return Err(ExtractionError::AnchorOrderInvalid { start, end });
        }
        Ok(&raw[seg_start..end])
    }

    /// Run every rule over `text`, in order.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = s!(text);
        for r in &self.rules {
            if r.find.is_empty() {
                continue;
            }
            out = out.replace(&r.find, &r.replace);
        }
        out
    }

    pub fn extract(&self, raw: &str) -> Result<NormalizedTable, ExtractionError> {
        let segment = self.segment(raw)?;
        Ok(NormalizedTable::new(self.substitute(segment)))
    }
}
