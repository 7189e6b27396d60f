//! Simulation and display settings
//!
//! Persisted as JSON next to the border record. Every field has a default,
//! so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{BORDER_FILE, DEFAULT_DISPLAY_SCALE, DEFAULT_REFLECTION_LIMIT, STEP_SIZE};
use crate::error::Result;
use crate::sim::SimParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Distance advanced per step (logical pixels)
    pub step_size: f64,
    /// Wall hits to simulate per shot
    pub reflection_limit: usize,

    // === Display ===
    /// Factor screenshots are resized by before being shown
    pub display_scale: f64,

    // === Files ===
    /// Border record written by calibration
    pub border_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_size: STEP_SIZE,
            reflection_limit: DEFAULT_REFLECTION_LIMIT,

            display_scale: DEFAULT_DISPLAY_SCALE,

            border_file: PathBuf::from(BORDER_FILE),
        }
    }
}

impl Settings {
    /// Stepping parameters for the trajectory engine
    pub fn sim_params(&self) -> SimParams {
        SimParams {
            step_size: self.step_size,
            reflection_limit: self.reflection_limit,
        }
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
