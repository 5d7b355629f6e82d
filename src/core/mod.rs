// src/core/mod.rs

pub mod document;

pub use document::RawDocument;
