// src/gui/actions/process.rs
use crate::{
    fetch::ChromeRenderer,
    gui::{
        app::{App, Notice},
        progress::GuiProgress,
    },
    pipeline,
};

/// "Process" button. Runs to completion on the UI thread; a URL render
/// blocks the window until the browser is done.
pub fn process(app: &mut App) {
    app.state.options.export.set_path(&app.state.gui.out_path_text);

    let job = app.job();
    logf!(
        "Process: Begin source={:?} out={:?}",
        job.source(),
        job.output().map(|p| p.display().to_string())
    );

    let renderer = ChromeRenderer::new(app.state.options.fetch.clone());
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the work happens ←
    match pipeline::run(&job, &app.state.options, &renderer, Some(&mut prog)) {
        Ok(summary) => {
            let msg = format!("Data cleaned and saved to '{}'", summary.output.display());
            app.status(format!("Saved {} rows", summary.rows()));
            app.notice = Some(Notice::success(msg));
            app.table = Some(summary.table);
        }
        Err(e) => {
            loge!("Process: Error: {}", e);
            app.status("Failed");
            app.notice = Some(Notice::error(e.to_string()));
        }
    }
}
