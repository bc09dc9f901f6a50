use std::path::PathBuf;

use eframe::egui;
use egui_phosphor::regular as Icon;
use tracing::info;

use crate::app::DatasetToolboxApp;
use crate::core::resize::{resize_image, ResizeRequest};
use crate::ui::widgets;

/// UI state for the image resizer page
pub struct ResizePageState {
    pub image_path: String,
    pub width: u32,
    pub height: u32,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

impl ResizePageState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image_path: String::new(),
            width,
            height,
            output: None,
            error: None,
        }
    }
}

pub fn render_resize_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    ui.heading(format!("{} Image Resizer", Icon::FRAME_CORNERS));
    ui.label(
        "Resize a single image to an exact resolution. The result is saved next \
         to the original with a _resized suffix.",
    );
    ui.separator();

    let state = &mut app.resize;
    widgets::file_picker_row(
        ui,
        "Image path:",
        &mut state.image_path,
        "images",
        &["jpg", "jpeg", "png"],
    );

    ui.horizontal(|ui| {
        ui.label("Width:");
        ui.add(egui::DragValue::new(&mut state.width).range(1..=16_384));
        ui.label("Height:");
        ui.add(egui::DragValue::new(&mut state.height).range(1..=16_384));
    });

    ui.add_space(8.0);
    if ui
        .add_enabled(
            !state.image_path.is_empty(),
            egui::Button::new(format!("{} Resize Image", Icon::ROCKET_LAUNCH)),
        )
        .clicked()
    {
        state.output = None;
        state.error = None;
        let req = ResizeRequest {
            image_path: PathBuf::from(&state.image_path),
            width: state.width,
            height: state.height,
        };
        info!("Resizing {:?} to {}x{}", req.image_path, req.width, req.height);
        // Single-image resize is fast enough to run on the UI thread
        match resize_image(&req) {
            Ok(path) => state.output = Some(path),
            Err(e) => state.error = Some(e.to_string()),
        }
    }

    if let Some(output) = &state.output {
        widgets::success_label(ui, &format!("Resized image saved at: {:?}", output));
    }
    if let Some(error) = &state.error {
        widgets::error_label(ui, error);
    }
}
