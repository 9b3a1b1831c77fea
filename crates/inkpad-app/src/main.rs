//! Inkpad: a drawing pad with marker strokes and emoji stickers.

mod app;
mod config;
mod shortcuts;
mod ui;

use thiserror::Error;

/// Fatal application errors.
#[derive(Debug, Error)]
enum AppError {
    /// The window or rendering surface could not be created.
    #[error("failed to start the window: {0}")]
    Startup(#[from] eframe::Error),
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Starting Inkpad");

    let config = config::AppConfig::default();
    let window_size = egui::vec2(
        (config.canvas_size.0 as f32 + 48.0).max(460.0),
        config.canvas_size.1 as f32 + 140.0,
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Inkpad",
        options,
        Box::new(move |_cc| Ok(Box::new(app::InkpadApp::new(config)))),
    )?;
    Ok(())
}
