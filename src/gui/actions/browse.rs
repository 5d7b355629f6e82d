// src/gui/actions/browse.rs
//
// Native file dialogs (rfd). Cancelling leaves the text fields untouched.

use std::path::{Path, PathBuf};

use crate::{
    config::consts::DEFAULT_OUT_FILE,
    gui::app::App,
};

fn start_dir(app: &App, fallback: Option<&Path>) -> Option<PathBuf> {
    let last = &app.state.gui.last_browse_dir;
    if !last.is_empty() {
        return Some(PathBuf::from(last));
    }
    fallback.map(Path::to_path_buf)
}

fn remember_dir(app: &mut App, picked: &Path) {
    if let Some(dir) = picked.parent() {
        app.state.gui.last_browse_dir = dir.to_string_lossy().into_owned();
    }
}

pub fn browse_input(app: &mut App) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Select saved page")
        .add_filter("Web page", &["html", "htm"])
        .add_filter("All files", &["*"]);
    if let Some(dir) = start_dir(app, None) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        logf!("UI: input → {}", path.display());
        remember_dir(app, &path);
        app.state.gui.input_text = path.to_string_lossy().into_owned();
    }
}

pub fn browse_output(app: &mut App) {
    let current = app.state.options.export.out_path().to_path_buf();
    let mut dialog = rfd::FileDialog::new()
        .set_title("Save output as")
        .set_file_name(DEFAULT_OUT_FILE)
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"]);
    if let Some(dir) = start_dir(app, current.parent()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.save_file() {
        logf!("UI: output → {}", path.display());
        remember_dir(app, &path);
        app.state.gui.out_path_text = path.to_string_lossy().into_owned();
        app.state.options.export.set_path(&app.state.gui.out_path_text);
    }
}
