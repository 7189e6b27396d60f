//! Border record persistence
//!
//! The calibrated border is stored as a flat JSON object with the integer
//! keys `L`, `R`, `U`, `D`. Nothing else is persisted.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::sim::Border;

/// Load and validate a border record from `path`
pub fn load_border(path: impl AsRef<Path>) -> Result<Border> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let record: serde_json::Value = serde_json::from_str(&text)?;
    let border = Border::from_record(&record)?;
    log::info!(
        "Loaded border from {}: L={} R={} U={} D={}",
        path.display(),
        border.left,
        border.right,
        border.up,
        border.down
    );
    Ok(border)
}

/// Write `border` to `path` as a border record, replacing any existing file
pub fn store_border(path: impl AsRef<Path>, border: &Border) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&border.to_record())?;
    fs::write(path, json)?;
    log::info!("Border saved to {}", path.display());
    Ok(())
}
