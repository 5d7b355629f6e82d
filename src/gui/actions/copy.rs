// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(ctx: &egui::Context, app: &App) {
    match &app.table {
        Some(table) if !table.is_empty() => {
            logf!("Copy: rows={}", table.row_count());
            ctx.copy_text(table.to_string());
            app.status("Copied to clipboard");
        }
        _ => {
            logd!("Copy: Clicked, but there's nothing to copy");
            app.status("Nothing to copy");
        }
    }
}
