//! Overlay geometry for an external drawing layer
//!
//! Produces plain line segments in pixel space; rasterizing them onto a
//! screenshot is left to whoever displays it.

pub mod shapes;

pub use shapes::{Line, border_lines, overlay, scale_line, trajectory_lines};
