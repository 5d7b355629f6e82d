// src/gui/components/source_panel.rs
//
// Input side of the form: saved page on disk, or a URL to render.

use eframe::egui;

use crate::{
    config::state::SourceKind,
    gui::{actions, app::App},
};

const FIELD_W: f32 = 380.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut browse_clicked = false;

    {
        let gui = &mut app.state.gui;

        ui.horizontal(|ui| {
            ui.label("Source:");
            let before = gui.source;
            ui.radio_value(&mut gui.source, SourceKind::File, "Saved page");
            ui.radio_value(&mut gui.source, SourceKind::Url, "URL");
            if gui.source != before {
                logf!("UI: source → {:?}", gui.source);
            }
        });

        egui::Grid::new("source_grid")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| match gui.source {
                SourceKind::File => {
                    ui.label("Input File:");
                    ui.add(
                        egui::TextEdit::singleline(&mut gui.input_text)
                            .desired_width(FIELD_W)
                            .font(egui::TextStyle::Monospace),
                    );
                    if ui.button("Browse").clicked() {
                        browse_clicked = true;
                    }
                    ui.end_row();
                }
                SourceKind::Url => {
                    ui.label("Page URL:");
                    ui.add(
                        egui::TextEdit::singleline(&mut gui.url_text)
                            .desired_width(FIELD_W)
                            .hint_text("https://www.rtings.com/headphones/…")
                            .font(egui::TextStyle::Monospace),
                    );
                    ui.label("");
                    ui.end_row();
                }
            });
    }

    if browse_clicked {
        actions::browse_input(app);
    }
}
