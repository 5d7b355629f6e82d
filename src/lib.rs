// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod file;
pub mod gui;
pub mod pipeline;
pub mod progress;

pub use crate::core::RawDocument;
pub use error::AppError;
pub use extract::{extract, ExtractionError, MatchPolicy, NormalizedTable};
pub use pipeline::{Job, RunSummary, Source};
