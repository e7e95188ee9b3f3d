//! Notepad - a plain text editor for the Slow Computer
//!
//! One untitled document at startup, saved as UTF-8 `.txt` files.

mod app;
mod commands;
mod document;
mod error;
mod file_io;
mod font_dialog;
mod fonts;
mod history;
mod preferences;
mod settings;

use app::NotepadApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let _logging = padcore::logging::init(preferences::APP_NAME);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting notepad");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([400.0, 500.0])
        .with_title(document::UNTITLED_TITLE);

    if let Some(pos) = padcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native("Notepad", options, Box::new(|cc| {
        padcore::SlowTheme::default().apply(&cc.egui_ctx);
        Box::new(NotepadApp::new(cc))
    }))
}
