use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use eframe::egui;
use egui_phosphor::regular as Icon;
use tracing::info;

use crate::app::DatasetToolboxApp;
use crate::core::error::ToolResult;
use crate::core::split::{
    split_classification_dataset, ClassificationSplitRequest, SplitRatios, SplitResult,
};
use crate::ui::widgets;

/// UI state for the classification dataset splitter page
pub struct ClassificationSplitState {
    pub source: String,
    pub dest: String,
    pub train: f32,
    pub val: f32,
    pub running: bool,
    pub result: Option<SplitResult>,
    pub error: Option<String>,
    receiver: Option<Receiver<ToolResult<SplitResult>>>,
}

impl ClassificationSplitState {
    pub fn new() -> Self {
        Self {
            source: String::new(),
            dest: String::new(),
            train: 0.7,
            val: 0.3,
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
        let req = ClassificationSplitRequest {
            source: PathBuf::from(&self.source),
            dest: PathBuf::from(&self.dest),
            ratios: SplitRatios {
                train: self.train,
                val: self.val,
                test: 0.0,
            },
            seed: None,
        };
        info!(
            "Starting classification split: {:?} -> {:?}",
            req.source, req.dest
        );

        let (tx, rx) = channel();
        self.receiver = Some(rx);
        self.running = true;
        self.result = None;
        self.error = None;

        thread::spawn(move || {
            let _ = tx.send(split_classification_dataset(&req));
        });
    }
}

pub fn render_classification_split_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    app.classification.poll();

    ui.heading(format!("{} Classification Dataset Splitter", Icon::TAG));
    ui.label(
        "Split a classification dataset (one folder per class, or a flat image \
         folder) into train/val folders, keeping the class structure intact.",
    );
    ui.separator();

    let state = &mut app.classification;
    if widgets::folder_picker_row(ui, "Dataset directory:", &mut state.source) {
        app.settings.last_source_dir = Some(PathBuf::from(&state.source));
        app.settings.save();
    }
    if widgets::folder_picker_row(ui, "Output directory:", &mut state.dest) {
        app.settings.last_output_dir = Some(PathBuf::from(&state.dest));
        app.settings.save();
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Train:");
        ui.add(egui::Slider::new(&mut state.train, 0.0..=1.0).step_by(0.05));
        ui.label("Val:");
        ui.add(egui::Slider::new(&mut state.val, 0.0..=1.0).step_by(0.05));
    });
    ui.label("Train + Val must sum to 1.0.");

    ui.add_space(8.0);
    let ready = !state.source.is_empty() && !state.dest.is_empty();
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
                "Split complete! Train: {}, Validation: {}",
                result.train, result.val
            ),
        );
    }
    if let Some(error) = &state.error {
        widgets::error_label(ui, error);
    }
}
