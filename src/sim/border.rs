//! Rectangular playfield border in logical pixel coordinates
//!
//! The persisted form is a flat record with exactly four integer keys:
//! `{"L": .., "R": .., "U": .., "D": ..}`.

use glam::IVec2;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Record keys, in the order they are checked
pub const RECORD_KEYS: [&str; 4] = ["L", "R", "U", "D"];

/// Axis-aligned playfield rectangle
///
/// `up` is the smaller y bound because screen y grows downward.
/// Fields are public so upstream code can assemble a border directly; such a
/// border is not validated and may trip `Error::InvalidBorderState` during
/// simulation. Prefer [`Border::new`] or [`Border::from_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Border {
    #[serde(rename = "L")]
    pub left: i32,
    #[serde(rename = "R")]
    pub right: i32,
    #[serde(rename = "U")]
    pub up: i32,
    #[serde(rename = "D")]
    pub down: i32,
}

impl Border {
    /// Create a border, rejecting anything that violates `L < R`, `U < D`
    pub fn new(left: i32, right: i32, up: i32, down: i32) -> Result<Self> {
        let border = Self {
            left,
            right,
            up,
            down,
        };
        border.validate()?;
        Ok(border)
    }

    /// Parse a border record
    ///
    /// Fails with `MissingField` for the first absent key (in `L, R, U, D`
    /// order) before looking at any values.
    pub fn from_record(record: &Value) -> Result<Self> {
        let map = record.as_object().ok_or(Error::NotARecord)?;

        if let Some(key) = RECORD_KEYS.iter().find(|key| !map.contains_key(**key)) {
            return Err(Error::MissingField(*key));
        }

        Self::new(
            int_field(map, "L")?,
            int_field(map, "R")?,
            int_field(map, "U")?,
            int_field(map, "D")?,
        )
    }

    /// Flat key-value form of this border
    pub fn to_record(&self) -> Value {
        serde_json::json!({
            "L": self.left,
            "R": self.right,
            "U": self.up,
            "D": self.down,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(Error::InvalidBorder {
                left: self.left,
                right: self.right,
                up: self.up,
                down: self.down,
            })
        }
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.left < self.right && self.up < self.down
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [IVec2; 4] {
        [
            IVec2::new(self.left, self.up),
            IVec2::new(self.right, self.up),
            IVec2::new(self.right, self.down),
            IVec2::new(self.left, self.down),
        ]
    }
}

fn int_field(map: &Map<String, Value>, key: &'static str) -> Result<i32> {
    let value = &map[key];
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| Error::InvalidField {
            key,
            value: value.to_string(),
        })
}
