// src/core/document.rs
use std::fmt;

/// Page source as read from disk or captured from the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDocument(String);

impl RawDocument {
    /// Saved pages are usually UTF-8; anything else is decoded lossily.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RawDocument {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RawDocument {
    fn from(s: &str) -> Self {
        Self(s!(s))
    }
}

impl fmt::Display for RawDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
