use crate::core::split::SplitRatios;

/// Application configuration containing all hardcoded values
///
/// This struct centralizes configuration values to make them easier to
/// manage and provides a foundation for future configuration file support.
#[derive(Clone)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub side_panel_width: f32,
    pub default_ratios: SplitRatios,
    /// Default per-class image cap for the balancer
    pub default_max_per_class: usize,
    /// Default target resolution for the resizer
    pub default_resize_width: u32,
    pub default_resize_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 780.0,
            side_panel_width: 230.0,
            default_ratios: SplitRatios::default(),
            default_max_per_class: 1000,
            default_resize_width: 640,
            default_resize_height: 640,
        }
    }
}
