use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Persistent user settings that are saved between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Last source directory used by any tool
    pub last_source_dir: Option<PathBuf>,

    /// Last output directory used by any tool
    pub last_output_dir: Option<PathBuf>,

    /// Last classes file picked for the detection splitter / class counter
    pub last_classes_file: Option<PathBuf>,

    /// Last window width
    pub window_width: f32,

    /// Last window height
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_source_dir: None,
            last_output_dir: None,
            last_classes_file: None,
            window_width: 1100.0,
            window_height: 780.0,
        }
    }
}

impl Settings {
    /// Get the path to the settings file (in the same directory as the executable)
    pub fn get_config_path() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()))
            .map(|dir| dir.join("settings.json"))
    }

    /// Load settings from disk, or return defaults if file doesn't exist or is corrupted
    pub fn load() -> Self {
        if let Some(config_path) = Self::get_config_path() {
            info!("Loading settings from: {:?}", config_path);

            match fs::read_to_string(&config_path) {
                Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                    Ok(settings) => {
                        info!("Successfully loaded settings");
                        return settings;
                    }
                    Err(e) => {
                        warn!("Failed to parse settings file: {}. Using defaults.", e);
                    }
                },
                Err(e) => {
                    // It's normal for the file not to exist on first run
                    if e.kind() != std::io::ErrorKind::NotFound {
                        warn!("Failed to read settings file: {}. Using defaults.", e);
                    } else {
                        info!("No settings file found. Using defaults.");
                    }
                }
            }
        } else {
            warn!("Could not determine config directory. Using defaults.");
        }

        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) {
        if let Some(config_path) = Self::get_config_path() {
            if let Some(parent) = config_path.parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("Failed to create config directory: {}", e);
                    return;
                }
            }

            match serde_json::to_string_pretty(self) {
                Ok(json) => {
                    if let Err(e) = fs::write(&config_path, json) {
                        warn!("Failed to write settings file: {}", e);
                    } else {
                        info!("Settings saved to: {:?}", config_path);
                    }
                }
                Err(e) => {
                    warn!("Failed to serialize settings: {}", e);
                }
            }
        } else {
            warn!("Could not determine config directory. Settings not saved.");
        }
    }
}
