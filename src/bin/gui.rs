// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use rtings_extract::{config::consts::*, gui};

/// 32×32 chart glyph: white tile, grey axes, a green response curve.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let curve = |x: u32| -> u32 {
        // gentle bass bump then treble roll-off
        let t = x as f32 / (N - 1) as f32;
        let y = 0.55 - 0.25 * (-(t - 0.2).powi(2) * 30.0).exp() + 0.3 * t.powi(3);
        (y * (N - 1) as f32).round() as u32
    };
    let rgba: RgbaImage = RgbaImage::from_fn(N, N, |x, y| {
        if x == 3 || y == N - 4 {
            Rgba([120, 120, 120, 255])
        } else if x > 3 && curve(x).abs_diff(y) <= 1 {
            Rgba([40, 160, 90, 255])
        } else {
            Rgba([250, 250, 250, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
