// src/gui/components/notice.rs
use eframe::egui;

use crate::gui::app::{App, NoticeKind};

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(notice) = &app.notice else { return };

    let mut ok_clicked = false;
    let resp = egui::Modal::new(egui::Id::new("run_notice")).show(ctx, |ui| {
        ui.set_width(380.0);
        let color = match notice.kind {
            NoticeKind::Success => ui.visuals().text_color(),
            NoticeKind::Error => ui.visuals().error_fg_color,
        };
        ui.heading(egui::RichText::new(notice.title()).color(color));
        ui.add_space(6.0);
        ui.label(notice.message.as_str());
        ui.add_space(10.0);
        if ui.button("OK").clicked() {
            ok_clicked = true;
        }
    });

    if ok_clicked || resp.should_close() {
        app.notice = None;
    }
}
