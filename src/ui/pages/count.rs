use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use eframe::egui;
use egui_phosphor::regular as Icon;
use tracing::info;

use crate::app::DatasetToolboxApp;
use crate::core::count::{count_classes, ClassCounts, CountRequest};
use crate::core::error::ToolResult;
use crate::ui::widgets;

/// UI state for the class counter page
pub struct CountPageState {
    pub dataset_dir: String,
    pub classes_file: String,
    pub running: bool,
    pub counts: Option<ClassCounts>,
    pub error: Option<String>,
    receiver: Option<Receiver<ToolResult<ClassCounts>>>,
}

impl CountPageState {
    pub fn new() -> Self {
        Self {
            dataset_dir: String::new(),
            classes_file: String::new(),
            running: false,
            counts: None,
            error: None,
            receiver: None,
        }
    }

    fn poll(&mut self) {
        if let Some(rx) = &self.receiver {
            if let Ok(outcome) = rx.try_recv() {
                match outcome {
                    Ok(counts) => self.counts = Some(counts),
                    Err(e) => self.error = Some(e.to_string()),
                }
                self.running = false;
                self.receiver = None;
            }
        }
    }

    fn start(&mut self) {
        let req = CountRequest {
            dataset_dir: PathBuf::from(&self.dataset_dir),
            classes_file: PathBuf::from(&self.classes_file),
        };
        info!("Counting classes under {:?}", req.dataset_dir);

        let (tx, rx) = channel();
        self.receiver = Some(rx);
        self.running = true;
        self.counts = None;
        self.error = None;

        thread::spawn(move || {
            let _ = tx.send(count_classes(&req));
        });
    }
}

pub fn render_count_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    app.count.poll();

    ui.heading(format!("{} Class Counter", Icon::CHART_BAR));
    ui.label(
        "Count images per class across a dataset. Every image is attributed to \
         the class named by its parent folder and reported against the class list.",
    );
    ui.separator();

    let state = &mut app.count;
    if widgets::folder_picker_row(ui, "Dataset directory:", &mut state.dataset_dir) {
        app.settings.last_source_dir = Some(PathBuf::from(&state.dataset_dir));
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
    let ready = !state.dataset_dir.is_empty() && !state.classes_file.is_empty();
    if ui
        .add_enabled(
            ready && !state.running,
            egui::Button::new(format!("{} Count Images", Icon::MAGNIFYING_GLASS)),
        )
        .clicked()
    {
        state.start();
    }

    if state.running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Walking dataset...");
        });
    }

    if let Some(counts) = &state.counts {
        widgets::success_label(
            ui,
            &format!(
                "{} classes, {} images total",
                counts.listed.len(),
                counts.total()
            ),
        );
        egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            egui::Grid::new("class_counts").striped(true).show(ui, |ui| {
                ui.strong("Class");
                ui.strong("Images");
                ui.end_row();
                for (class, n) in &counts.listed {
                    ui.label(class);
                    ui.label(n.to_string());
                    ui.end_row();
                }
            });
            if !counts.unlisted.is_empty() {
                ui.add_space(6.0);
                ui.strong("Folders not in the class list:");
                for (folder, n) in &counts.unlisted {
                    ui.label(format!("{}: {} images", folder, n));
                }
            }
        });
    }
    if let Some(error) = &state.error {
        widgets::error_label(ui, error);
    }
}
