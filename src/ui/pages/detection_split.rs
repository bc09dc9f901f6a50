use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use eframe::egui;
use egui_phosphor::regular as Icon;
use tracing::info;

use crate::app::DatasetToolboxApp;
use crate::core::error::ToolResult;
use crate::core::split::{split_detection_dataset, DetectionSplitRequest, SplitRatios, SplitResult};
use crate::ui::widgets;

/// UI state for the detection dataset splitter page
pub struct DetectionSplitState {
    pub source: String,
    pub dest: String,
    pub classes_file: String,
    pub ratios: SplitRatios,
    pub running: bool,
    pub result: Option<SplitResult>,
    pub error: Option<String>,
    receiver: Option<Receiver<ToolResult<SplitResult>>>,
}

impl DetectionSplitState {
    pub fn new(ratios: SplitRatios) -> Self {
        Self {
            source: String::new(),
            dest: String::new(),
            classes_file: String::new(),
            ratios,
            running: false,
            result: None,
            error: None,
            receiver: None,
        }
    }

    fn poll(&mut self) {
        if let Some(rx) = &self.receiver {
            if let Ok(outcome) = rx.try_recv() {
                match outcome {
                    Ok(result) => self.result = Some(result),
                    Err(e) => self.error = Some(e.to_string()),
                }
                self.running = false;
                self.receiver = None;
            }
        }
    }

    fn start(&mut self) {
        let req = DetectionSplitRequest {
            source: PathBuf::from(&self.source),
            dest: PathBuf::from(&self.dest),
            ratios: self.ratios,
            classes_file: PathBuf::from(&self.classes_file),
            seed: None,
        };
        info!("Starting detection split: {:?} -> {:?}", req.source, req.dest);

        let (tx, rx) = channel();
        self.receiver = Some(rx);
        self.running = true;
        self.result = None;
        self.error = None;

        thread::spawn(move || {
            let _ = tx.send(split_detection_dataset(&req));
        });
    }
}

pub fn render_detection_split_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    app.detection.poll();

    ui.heading(format!("{} Detection Dataset Splitter", Icon::FOLDERS));
    ui.label(
        "Split a YOLO-format dataset (images/ + labels/) into train/valid/test \
         folders and emit a data.yaml manifest.",
    );
    ui.separator();

    let state = &mut app.detection;
    if widgets::folder_picker_row(ui, "Source dataset:", &mut state.source) {
        app.settings.last_source_dir = Some(PathBuf::from(&state.source));
        app.settings.save();
    }
    if widgets::folder_picker_row(ui, "Destination:", &mut state.dest) {
        app.settings.last_output_dir = Some(PathBuf::from(&state.dest));
        app.settings.save();
    }
    if widgets::file_picker_row(
        ui,
        "Classes file:",
        &mut state.classes_file,
        "class names",
        &["names", "txt"],
    ) {
        app.settings.last_classes_file = Some(PathBuf::from(&state.classes_file));
        app.settings.save();
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Train:");
        ui.add(egui::Slider::new(&mut state.ratios.train, 0.0..=1.0).step_by(0.05));
        ui.label("Val:");
        ui.add(egui::Slider::new(&mut state.ratios.val, 0.0..=1.0).step_by(0.05));
        ui.label("Test:");
        ui.add(egui::Slider::new(&mut state.ratios.test, 0.0..=1.0).step_by(0.05));
    });
    ui.label("Ratios must sum to 1.0. A test ratio of 0 disables the test split.");

    ui.add_space(8.0);
    let ready = !state.source.is_empty() && !state.dest.is_empty() && !state.classes_file.is_empty();
    if ui
        .add_enabled(
            ready && !state.running,
            egui::Button::new(format!("{} Split Dataset", Icon::ROCKET_LAUNCH)),
        )
        .clicked()
    {
        state.start();
    }

    if state.running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Splitting dataset...");
        });
    }
    if let Some(result) = &state.result {
        widgets::success_label(
            ui,
            &format!(
                "Split complete! Train: {}, Validation: {}, Test: {} ({} images total)",
                result.train, result.val, result.test,
                result.total()
            ),
        );
    }
    if let Some(error) = &state.error {
        widgets::error_label(ui, error);
    }
}
