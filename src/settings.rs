//! Runtime settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults.

use std::path::{Path, PathBuf};

use glam::UVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Settings load/save failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Race settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Fixed simulation ticks per second
    pub tick_rate_hz: u32,
    /// Upper bound on catch-up ticks per host frame (None = unbounded)
    pub max_catch_up_ticks: Option<u32>,

    // === Display ===
    /// Logical raster width in pixels
    pub logical_width: u32,
    /// Logical raster height in pixels
    pub logical_height: u32,
    /// Physical pixels per logical cell
    pub cell_width: u32,
    pub cell_height: u32,

    // === HUD ===
    /// Show the telemetry/lap overlay
    pub show_hud: bool,

    // === Export ===
    /// Directory for scene snapshots
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            max_catch_up_ticks: None,

            logical_width: LOGICAL_WIDTH,
            logical_height: LOGICAL_HEIGHT,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,

            show_hud: true,

            export_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Seconds per simulation tick
    pub fn tick_period(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }

    pub fn logical_size(&self) -> UVec2 {
        UVec2::new(self.logical_width, self.logical_height)
    }

    pub fn cell_size(&self) -> UVec2 {
        UVec2::new(self.cell_width, self.cell_height)
    }

    /// Display size after scaling every logical pixel to one cell
    pub fn physical_size(&self) -> UVec2 {
        self.logical_size() * self.cell_size()
    }

    /// Reject settings the core cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_rate_hz",
                reason: "must be positive",
            });
        }
        if self.logical_width < 4 || self.logical_height < 4 {
            return Err(SettingsError::Invalid {
                field: "logical_width/logical_height",
                reason: "must be at least 4x4",
            });
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(SettingsError::Invalid {
                field: "cell_width/cell_height",
                reason: "must be positive",
            });
        }
        if self.max_catch_up_ticks == Some(0) {
            return Err(SettingsError::Invalid {
                field: "max_catch_up_ticks",
                reason: "must be positive when set",
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
