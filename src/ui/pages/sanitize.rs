use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;

use eframe::egui;
use egui_phosphor::regular as Icon;
use tracing::info;

use crate::app::DatasetToolboxApp;
use crate::core::sanitize::{
    sanitize_dataset_with_progress, SanitizeAction, SanitizeProgressMessage, SanitizeReport,
    SanitizeRequest,
};
use crate::ui::widgets;

/// UI state for the resolution sanitizer page
pub struct SanitizePageState {
    pub root: String,
    /// 0 disables the threshold
    pub min_width: u32,
    pub min_height: u32,
    pub running: bool,
    pub progress: Option<(usize, usize)>,
    pub report: Option<SanitizeReport>,
    pub cancelled: bool,
    pub error: Option<String>,
    receiver: Option<Receiver<SanitizeProgressMessage>>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl SanitizePageState {
    pub fn new() -> Self {
        Self {
            root: String::new(),
            min_width: 0,
            min_height: 0,
            running: false,
            progress: None,
            report: None,
            cancelled: false,
            error: None,
            receiver: None,
            cancel_flag: None,
        }
    }

    fn poll(&mut self) {
        let mut finished = false;
        if let Some(rx) = &self.receiver {
            while let Ok(message) = rx.try_recv() {
                match message {
                    SanitizeProgressMessage::Progress { current, total } => {
                        self.progress = Some((current, total));
                    }
                    SanitizeProgressMessage::Complete(report) => {
                        self.report = Some(report);
                        finished = true;
                    }
                    SanitizeProgressMessage::Cancelled(report) => {
                        self.report = Some(report);
                        self.cancelled = true;
                        finished = true;
                    }
                    SanitizeProgressMessage::Error(message) => {
                        self.error = Some(message);
                        finished = true;
                    }
                }
            }
        }
        if finished {
            self.running = false;
            self.receiver = None;
            self.cancel_flag = None;
        }
    }

    fn start(&mut self) {
        let req = SanitizeRequest {
            root: PathBuf::from(&self.root),
            min_width: (self.min_width > 0).then_some(self.min_width),
            min_height: (self.min_height > 0).then_some(self.min_height),
        };
        info!(
            "Starting sanitize under {:?} (min width {:?}, min height {:?})",
            req.root, req.min_width, req.min_height
        );

        let (tx, rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        self.receiver = Some(rx);
        self.cancel_flag = Some(cancel_flag.clone());
        self.running = true;
        self.progress = None;
        self.report = None;
        self.cancelled = false;
        self.error = None;

        thread::spawn(move || {
            if let Err(e) =
                sanitize_dataset_with_progress(&req, Some(tx.clone()), Some(cancel_flag))
            {
                let _ = tx.send(SanitizeProgressMessage::Error(e.to_string()));
            }
        });
    }

    fn cancel(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::Relaxed);
        }
    }
}

fn log_line(entry_path: &std::path::Path, action: &SanitizeAction) -> String {
    match action {
        SanitizeAction::Deleted { width, height } => {
            format!("Deleted: {:?} (W:{}px, H:{}px)", entry_path, width, height)
        }
        SanitizeAction::Kept { width, height } => {
            format!("Kept: {:?} (W:{}px, H:{}px)", entry_path, width, height)
        }
        SanitizeAction::Unreadable(reason) => {
            format!("Not an image or unreadable: {:?} - {}", entry_path, reason)
        }
        SanitizeAction::DeleteFailed(reason) => {
            format!("Could not delete {:?} - {}", entry_path, reason)
        }
    }
}

pub fn render_sanitize_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    app.sanitize.poll();

    ui.heading(format!("{} Resolution Sanitizer", Icon::BROOM));
    ui.label(
        "Deletes images below a minimum width and/or height, walking the whole \
         folder tree. Leave a threshold at 0 to ignore that dimension.",
    );
    ui.separator();

    let state = &mut app.sanitize;
    if widgets::folder_picker_row(ui, "Root folder:", &mut state.root) {
        app.settings.last_source_dir = Some(PathBuf::from(&state.root));
        app.settings.save();
    }

    ui.horizontal(|ui| {
        ui.label("Minimum width (px):");
        ui.add(egui::DragValue::new(&mut state.min_width).range(0..=16_384));
        ui.label("Minimum height (px):");
        ui.add(egui::DragValue::new(&mut state.min_height).range(0..=16_384));
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                !state.root.is_empty() && !state.running,
                egui::Button::new(format!("{} Run Cleaner", Icon::ROCKET_LAUNCH)),
            )
            .clicked()
        {
            state.start();
        }
        if state.running && ui.button(format!("{} Cancel", Icon::X)).clicked() {
            state.cancel();
        }
    });

    if state.running {
        if let Some((current, total)) = state.progress {
            let fraction = if total > 0 {
                current as f32 / total as f32
            } else {
                0.0
            };
            ui.add(egui::ProgressBar::new(fraction).show_percentage());
            ui.label(format!("Checked {}/{} files", current, total));
        } else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Collecting files...");
            });
        }
    }

    if let Some(report) = &state.report {
        let prefix = if state.cancelled { "Cancelled. " } else { "" };
        widgets::success_label(
            ui,
            &format!(
                "{}Checked: {}, Deleted: {}, Kept: {}",
                prefix, report.checked, report.deleted, report.kept
            ),
        );
        egui::CollapsingHeader::new("Detailed log")
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    for entry in &report.log {
                        ui.label(log_line(&entry.path, &entry.action));
                    }
                });
            });
    }
    if let Some(error) = &state.error {
        widgets::error_label(ui, error);
    }
}
