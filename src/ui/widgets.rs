use eframe::egui;
use egui_phosphor::regular as Icon;

/// A labeled text input with a folder-picker button. Returns true when the
/// value changed through the picker.
pub fn folder_picker_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    let mut picked = false;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(380.0));
        if ui.button(format!("{} Browse", Icon::FOLDER_OPEN)).clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                *value = path.display().to_string();
                picked = true;
            }
        }
    });
    picked
}

/// A labeled text input with a file-picker button filtered to the given
/// extensions. Returns true when the value changed through the picker.
pub fn file_picker_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    filter_name: &str,
    extensions: &[&str],
) -> bool {
    let mut picked = false;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(380.0));
        if ui.button(format!("{} Browse", Icon::FILE)).clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter(filter_name, extensions)
                .pick_file()
            {
                *value = path.display().to_string();
                picked = true;
            }
        }
    });
    picked
}

/// Standard error banner
pub fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(
        egui::Color32::from_rgb(230, 90, 90),
        format!("{} {}", Icon::WARNING, message),
    );
}

/// Standard success banner
pub fn success_label(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(
        egui::Color32::from_rgb(110, 200, 110),
        format!("{} {}", Icon::CHECK_CIRCLE, message),
    );
}
