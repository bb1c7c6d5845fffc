//! Range slider settings persistence
//!
//! Handles saving and loading the initial slider configuration, metrics and
//! colors. Current values are not written back; every launch starts from
//! `initial`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::slider::{Metrics, SliderState};

/// RGBA color with components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Colors and opacity used to paint the slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Track outside the selected band
    pub track: Rgba,
    /// Selected band between the knobs
    pub band: Rgba,
    /// Knob fill
    pub knob: Rgba,
    /// Knob outline
    pub knob_border: Rgba,
    /// Outline width in pixels
    pub knob_border_width: f32,
    /// Drop shadow under each knob
    pub knob_shadow: Rgba,
    /// Knob opacity while it is being dragged
    #[serde(default = "default_highlighted_opacity")]
    pub highlighted_opacity: f32,
}

fn default_highlighted_opacity() -> f32 {
    0.88
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            track: [0.89, 0.90, 0.92, 1.0],
            band: [0.35, 0.67, 1.0, 1.0],
            knob: [1.0, 1.0, 1.0, 1.0],
            knob_border: [0.0, 0.0, 0.0, 0.04],
            knob_border_width: 0.5,
            knob_shadow: [0.0, 0.0, 0.0, 0.16],
            highlighted_opacity: default_highlighted_opacity(),
        }
    }
}

/// Range slider settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Range, bounds and behavior the slider starts with
    #[serde(default)]
    pub initial: SliderState,
    /// Pixel sizing
    #[serde(default)]
    pub metrics: Metrics,
    /// Colors
    #[serde(default)]
    pub appearance: Appearance,
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "range-slider", "RangeSlider")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::debug!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
