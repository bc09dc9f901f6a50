use eframe::egui;
use egui_phosphor::regular as Icon;

use crate::config::AppConfig;
use crate::state::Settings;
use crate::ui::pages::{
    render_balance_page, render_classification_split_page, render_count_page,
    render_detection_split_page, render_home_page, render_resize_page, render_sanitize_page,
    BalancePageState, ClassificationSplitState, CountPageState, DetectionSplitState,
    ResizePageState, SanitizePageState,
};

/// Pages of the toolbox, one per tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPage {
    Home,
    DetectionSplit,
    ClassificationSplit,
    Balance,
    Sanitize,
    Count,
    Resize,
}

impl ToolPage {
    pub fn title(&self) -> &str {
        match self {
            ToolPage::Home => "Home",
            ToolPage::DetectionSplit => "Detection Splitter",
            ToolPage::ClassificationSplit => "Classification Splitter",
            ToolPage::Balance => "Class Balancer",
            ToolPage::Sanitize => "Resolution Sanitizer",
            ToolPage::Count => "Class Counter",
            ToolPage::Resize => "Image Resizer",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            ToolPage::Home => Icon::HOUSE,
            ToolPage::DetectionSplit => Icon::FOLDERS,
            ToolPage::ClassificationSplit => Icon::TAG,
            ToolPage::Balance => Icon::SCALES,
            ToolPage::Sanitize => Icon::BROOM,
            ToolPage::Count => Icon::CHART_BAR,
            ToolPage::Resize => Icon::FRAME_CORNERS,
        }
    }

    pub fn all() -> [ToolPage; 7] {
        [
            ToolPage::Home,
            ToolPage::DetectionSplit,
            ToolPage::ClassificationSplit,
            ToolPage::Balance,
            ToolPage::Sanitize,
            ToolPage::Count,
            ToolPage::Resize,
        ]
    }
}

pub struct DatasetToolboxApp {
    pub config: AppConfig,
    pub settings: Settings,
    pub page: ToolPage,

    // Per-tool page state
    pub detection: DetectionSplitState,
    pub classification: ClassificationSplitState,
    pub balance: BalancePageState,
    pub sanitize: SanitizePageState,
    pub count: CountPageState,
    pub resize: ResizePageState,
}

impl Default for DatasetToolboxApp {
    fn default() -> Self {
        let config = AppConfig::default();
        let settings = Settings::load();

        let mut detection = DetectionSplitState::new(config.default_ratios);
        let mut classification = ClassificationSplitState::new();
        let balance = BalancePageState::new(config.default_max_per_class);
        let mut count = CountPageState::new();
        let resize =
            ResizePageState::new(config.default_resize_width, config.default_resize_height);

        // Pre-fill path inputs from the previous session
        if let Some(path) = &settings.last_source_dir {
            let path = path.display().to_string();
            detection.source = path.clone();
            classification.source = path;
        }
        if let Some(path) = &settings.last_output_dir {
            let path = path.display().to_string();
            detection.dest = path.clone();
            classification.dest = path;
        }
        if let Some(path) = &settings.last_classes_file {
            let path = path.display().to_string();
            detection.classes_file = path.clone();
            count.classes_file = path;
        }

        Self {
            config,
            settings,
            page: ToolPage::Home,
            detection,
            classification,
            balance,
            sanitize: SanitizePageState::new(),
            count,
            resize,
        }
    }
}

impl eframe::App for DatasetToolboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("tool_list")
            .exact_width(self.config.side_panel_width)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(format!("{} Tools", Icon::TOOLBOX));
                ui.separator();
                for page in ToolPage::all() {
                    if ui
                        .selectable_label(
                            self.page == page,
                            format!("{} {}", page.icon(), page.title()),
                        )
                        .clicked()
                    {
                        self.page = page;
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            ToolPage::Home => render_home_page(self, ui),
            ToolPage::DetectionSplit => render_detection_split_page(self, ui),
            ToolPage::ClassificationSplit => render_classification_split_page(self, ui),
            ToolPage::Balance => render_balance_page(self, ui),
            ToolPage::Sanitize => render_sanitize_page(self, ui),
            ToolPage::Count => render_count_page(self, ui),
            ToolPage::Resize => render_resize_page(self, ui),
        });

        // Keep polling background jobs even when the window is idle
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
