mod app;
mod convert;
mod panels;
mod state;

use anyhow::{Context, Result};
use polymask_core::config::SessionConfig;
use polymask_core::consts::MIN_VIEWPORT_EXTENT;
use polymask_core::io::image_io::load_source;
use polymask_core::session::Session;

use crate::panels::status::STATUS_PANEL_HEIGHT;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = SessionConfig::default();

    // Load before opening any window: a bad input ends the process here.
    let source = load_source(&config.input).with_context(|| {
        format!(
            "Failed to read image {}, please check path",
            config.input.display()
        )
    })?;
    let (width, height) = source.dimensions();
    let min_extent = MIN_VIEWPORT_EXTENT as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(initial_inner_size(&config, width, height))
            .with_min_inner_size([min_extent, min_extent])
            .with_resizable(true)
            .with_title("Polymask"),
        ..Default::default()
    };

    let session = Session::new(source);
    eframe::run_native(
        "Polymask",
        options,
        Box::new(move |_cc| Ok(Box::new(app::PolymaskApp::new(session, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))
}

/// Window inner size in logical points: the scaled image area plus the
/// status bar below it.
fn initial_inner_size(config: &SessionConfig, width: u32, height: u32) -> [f32; 2] {
    let [w, h] = config.initial_window_size(width, height);
    [w, h + STATUS_PANEL_HEIGHT]
}
