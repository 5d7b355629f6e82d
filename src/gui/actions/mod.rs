// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{browse_*, copy, process}.

mod browse;  // src/gui/actions/browse.rs
mod copy;    // src/gui/actions/copy.rs
mod process; // src/gui/actions/process.rs

pub use browse::{browse_input, browse_output};
pub use copy::copy;
pub use process::process;
