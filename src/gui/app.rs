// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        state::{AppState, SourceKind},
    },
    extract::NormalizedTable,
    file,
    pipeline::Job,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Modal shown after every run until dismissed.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    // last successful extraction, for preview + copy
    pub table: Option<NormalizedTable>,

    pub notice: Option<Notice>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        // initial out path text
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: out={}", state.gui.out_path_text);

        Self {
            state,
            status: Arc::new(Mutex::new(s!("Idle"))),
            table: None,
            notice: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Snapshot the form into explicit run parameters.
    /// Only the selected source kind is passed on.
    pub fn job(&self) -> Job {
        let gui = &self.state.gui;
        let text = |s: &str| Some(s!(s.trim())).filter(|t| !t.is_empty());

        Job {
            input: match gui.source {
                SourceKind::File => text(&gui.input_text).map(PathBuf::from),
                SourceKind::Url => None,
            },
            url: match gui.source {
                SourceKind::Url => text(&gui.url_text),
                SourceKind::File => None,
            },
            output: text(&gui.out_path_text).map(|t| file::resolve_out_path(&t)),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::source_panel::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });

        components::instructions::show(ctx, self);
        components::notice::show(ctx, self);
    }
}
