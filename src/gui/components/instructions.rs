// src/gui/components/instructions.rs
use eframe::egui;

use crate::{config::consts::INSTRUCTIONS, gui::app::App};

pub fn show(ctx: &egui::Context, app: &mut App) {
    let mut open = app.state.gui.show_instructions;
    if !open {
        return;
    }

    egui::Window::new("Instructions")
        .open(&mut open)
        .default_size([500.0, 300.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(INSTRUCTIONS);
            });
        });

    app.state.gui.show_instructions = open;
}
