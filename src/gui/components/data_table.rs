// src/gui/components/data_table.rs
//
// Read-only preview of the last extraction. Ragged rows get blank cells.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = &app.table else {
        ui.weak("No data yet. Pick a saved page (or URL) and an output file, then Process.");
        return;
    };

    let rows = table.rows();
    let cols = table.max_columns();
    if rows.is_empty() || cols == 0 {
        ui.weak("Extraction produced an empty table.");
        return;
    }

    ui.label(format!("Preview: {} row(s)", rows.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(90.0), cols)
        .header(20.0, |mut header| {
            for c in 0..cols {
                header.col(|ui| {
                    ui.strong(format!("Col {}", c + 1));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let r = &rows[row.index()];
                for c in 0..cols {
                    row.col(|ui| {
                        ui.monospace(r.get(c).copied().unwrap_or(""));
                    });
                }
            });
        });
}
