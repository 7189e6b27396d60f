//! Trajectory simulation module
//!
//! Everything here is pure and deterministic:
//! - Fixed step size, passed explicitly
//! - No clamping after a reflection
//! - No I/O apart from logging

pub mod border;
pub mod hit;
pub mod trajectory;

pub use border::{Border, RECORD_KEYS};
pub use hit::{HitKind, classify_hit, reflect};
pub use trajectory::{Bounce, SimParams, Tracer, Trajectory, simulate, simulate_with};
