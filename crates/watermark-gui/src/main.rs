mod app;
mod convert;
mod dialogs;
mod fonts;
mod panels;
mod states;
mod theme;

use std::path::Path;

use watermark_core::config::WatermarkConfig;
use watermark_core::consts::CONFIG_FILE_NAME;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = WatermarkConfig::load_or_default(Path::new(CONFIG_FILE_NAME)).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {CONFIG_FILE_NAME}: {e}");
        WatermarkConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::WINDOW_SIZE)
            .with_min_inner_size(theme::WINDOW_SIZE)
            .with_title("Image Watermarking App"),
        ..Default::default()
    };

    eframe::run_native(
        "WatermarkApp",
        options,
        Box::new(|cc| Ok(Box::new(app::WatermarkApp::new(&cc.egui_ctx, config)))),
    )
}
