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
use crate::core::balance::{
    balance_dataset_with_progress, BalanceProgressMessage, BalanceReport, BalanceRequest,
};
use crate::ui::widgets;

/// UI state for the class balancer page
pub struct BalancePageState {
    pub source: String,
    pub dest: String,
    pub max_per_class: usize,
    pub running: bool,
    pub progress: Option<(usize, usize, String)>,
    pub report: Option<BalanceReport>,
    pub cancelled: bool,
    pub error: Option<String>,
    receiver: Option<Receiver<BalanceProgressMessage>>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl BalancePageState {
    pub fn new(max_per_class: usize) -> Self {
        Self {
            source: String::new(),
            dest: String::new(),
            max_per_class,
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
                    BalanceProgressMessage::Progress {
                        class_index,
                        class_total,
                        class_name,
                        ..
                    } => {
                        self.progress = Some((class_index, class_total, class_name));
                    }
                    BalanceProgressMessage::Complete(report) => {
                        self.report = Some(report);
                        finished = true;
                    }
                    BalanceProgressMessage::Cancelled(report) => {
                        self.report = Some(report);
                        self.cancelled = true;
                        finished = true;
                    }
                    BalanceProgressMessage::Error(message) => {
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
        let req = BalanceRequest {
            source: PathBuf::from(&self.source),
            dest: PathBuf::from(&self.dest),
            max_per_class: self.max_per_class,
            seed: None,
        };
        info!(
            "Starting balancing: {:?} -> {:?}, cap {}",
            req.source, req.dest, req.max_per_class
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
            if let Err(e) = balance_dataset_with_progress(&req, Some(tx.clone()), Some(cancel_flag))
            {
                let _ = tx.send(BalanceProgressMessage::Error(e.to_string()));
            }
        });
    }

    fn cancel(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::Relaxed);
        }
    }
}

pub fn render_balance_page(app: &mut DatasetToolboxApp, ui: &mut egui::Ui) {
    app.balance.poll();

    ui.heading(format!("{} Class Balancer", Icon::SCALES));
    ui.label(
        "Limit the number of images per class: randomly picks up to the cap \
         from each class folder and copies them into the output folder.",
    );
    ui.separator();

    let state = &mut app.balance;
    if widgets::folder_picker_row(ui, "Input dataset:", &mut state.source) {
        app.settings.last_source_dir = Some(PathBuf::from(&state.source));
        app.settings.save();
    }
    if widgets::folder_picker_row(ui, "Output directory:", &mut state.dest) {
        app.settings.last_output_dir = Some(PathBuf::from(&state.dest));
        app.settings.save();
    }

    ui.horizontal(|ui| {
        ui.label("Max images per class:");
        ui.add(egui::DragValue::new(&mut state.max_per_class).range(1..=1_000_000));
    });

    ui.add_space(8.0);
    let ready = !state.source.is_empty() && !state.dest.is_empty();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                ready && !state.running,
                egui::Button::new(format!("{} Normalize Dataset", Icon::ROCKET_LAUNCH)),
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
        if let Some((current, total, class_name)) = &state.progress {
            let fraction = if *total > 0 {
                *current as f32 / *total as f32
            } else {
                0.0
            };
            ui.add(egui::ProgressBar::new(fraction).show_percentage());
            ui.label(format!(
                "Processing class {}/{}: {}",
                current, total, class_name
            ));
        } else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Scanning classes...");
            });
        }
    }

    if let Some(report) = &state.report {
        let verb = if state.cancelled {
            "Cancelled after copying"
        } else {
            "Done! Copied"
        };
        widgets::success_label(
            ui,
            &format!(
                "{} {} images across {} classes",
                verb,
                report.total_copied,
                report.classes.len()
            ),
        );
        egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
            for (class, copied) in &report.classes {
                ui.label(format!("{}: {} images", class, copied));
            }
        });
    }
    if let Some(error) = &state.error {
        widgets::error_label(ui, error);
    }
}
