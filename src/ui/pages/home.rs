use eframe::egui;
use egui_phosphor::regular as Icon;

use crate::app::{DatasetToolboxApp, ToolPage};

pub fn render_home_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    ui.heading(format!("{} Dataset Toolbox", Icon::TOOLBOX));
    ui.label("A collection of simple utilities to clean, organize, and balance datasets for ML projects.");
    ui.add_space(12.0);

    let tools = [
        (
            ToolPage::DetectionSplit,
            "Split YOLO-format datasets into train/valid/test with images & labels.",
        ),
        (
            ToolPage::ClassificationSplit,
            "Split classification datasets into train/val folders per class.",
        ),
        (
            ToolPage::Balance,
            "Balance a dataset by limiting the maximum number of images per class.",
        ),
        (
            ToolPage::Sanitize,
            "Remove low-resolution images below a chosen width/height threshold.",
        ),
        (
            ToolPage::Count,
            "Count the number of images per class in a dataset.",
        ),
        (
            ToolPage::Resize,
            "Resize a single image to an exact resolution.",
        ),
    ];

    let mut navigate = None;
    for (page, description) in tools {
        ui.horizontal(|ui| {
            if ui.button(page.title()).clicked() {
                navigate = Some(page);
            }
            ui.label(description);
        });
        ui.add_space(4.0);
    }
    if let Some(page) = navigate {
        app.page = page;
    }

    ui.add_space(12.0);
    ui.label("Select a tool from the sidebar to get started.");
}
