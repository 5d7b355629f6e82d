// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Url,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which input field feeds the next run
    pub source: SourceKind,

    pub input_text: String,
    pub url_text: String,
    pub out_path_text: String,

    pub last_browse_dir: String,

    pub show_instructions: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            source: SourceKind::File,
            input_text: s!(),
            url_text: s!(),
            out_path_text: s!(),
            last_browse_dir: s!(),
            show_instructions: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
