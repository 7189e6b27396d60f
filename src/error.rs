//! Crate error type

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A single point lies beyond three or more border planes at once.
    /// Only reachable with a border that violates `L < R`, `U < D`.
    #[error("point ({x}, {y}) lies beyond {planes} border planes at once")]
    InvalidBorderState { x: f64, y: f64, planes: usize },

    #[error("border record is missing field `{0}`")]
    MissingField(&'static str),

    #[error("border field `{key}` must be an integer, got {value}")]
    InvalidField { key: &'static str, value: String },

    #[error("border record must be a key-value object")]
    NotARecord,

    #[error("malformed border: L={left} R={right} U={up} D={down} (need L < R and U < D)")]
    InvalidBorder {
        left: i32,
        right: i32,
        up: i32,
        down: i32,
    },

    #[error("{what} must be finite, got {value}")]
    NonFiniteInput { what: &'static str, value: f64 },

    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("display scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
