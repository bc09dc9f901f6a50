use eframe::egui;
use tracing::info;

mod app;
mod config;
mod core;
mod infrastructure;
mod state;
mod ui;

use app::DatasetToolboxApp;
use config::AppConfig;
use infrastructure::logging::setup_logging;

fn main() -> Result<(), eframe::Error> {
    setup_logging();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Dataset Toolbox"),
        ..Default::default()
    };

    info!("Launching application window");
    eframe::run_native(
        "Dataset Toolbox",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(DatasetToolboxApp::default()))
        }),
    )
}
