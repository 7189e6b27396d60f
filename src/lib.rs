//! Ricochet - bounce-shot trajectory prediction
//!
//! Core modules:
//! - `sim`: Trajectory engine (border, hit classification, reflection, stepping)
//! - `platform`: Toolkit-independent border calibration from screen clicks
//! - `renderer`: Overlay geometry for an external drawing layer
//! - `persistence`: Flat key-value border record on disk
//! - `settings`: Simulation and display settings

pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;
pub use sim::{Border, Bounce, HitKind, SimParams, Tracer, Trajectory, simulate, simulate_with};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Distance advanced per simulation step (logical pixels)
    pub const STEP_SIZE: f64 = 0.1;
    /// Number of wall hits simulated when the caller does not say otherwise
    pub const DEFAULT_REFLECTION_LIMIT: usize = 10;
    /// Default file holding the calibrated border record
    pub const BORDER_FILE: &str = "border.json";
    /// Screen-to-display scale used by the original capture setup (1 / 2.5)
    pub const DEFAULT_DISPLAY_SCALE: f64 = 0.4;
}

/// Displacement of length `len` along `angle` (y grows downward on screen)
#[inline]
pub fn step_along(len: f64, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(len * cos, len * sin)
}
