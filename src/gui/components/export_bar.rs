// src/gui/components/export_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output field ---
    let mut save_as_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output File:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                    .desired_width(380.0)
                    .font(egui::TextStyle::Monospace),
            )
            .changed()
        {
            logd!("UI: out_path_text changed → {}", app.state.gui.out_path_text);
        }
        if ui.button("Save As").clicked() {
            save_as_clicked = true;
        }
    });
    if save_as_clicked {
        actions::browse_output(app);
    }

    // --- Actions (Process / Copy / Instructions) ---
    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 160, 90);
        if ui
            .add(
                egui::Button::new(egui::RichText::new("Process File").color(egui::Color32::WHITE).strong())
                    .fill(green),
            )
            .clicked()
        {
            app.status("Working…");
            actions::process(app);
        }

        let can_copy = app.table.as_ref().is_some_and(|t| !t.is_empty());
        if ui.add_enabled(can_copy, egui::Button::new("Copy")).clicked() {
            actions::copy(ui.ctx(), app);
        }

        if ui.button("Instructions").clicked() {
            app.state.gui.show_instructions = true;
        }
    });
}
