//! Platform abstraction layer
//!
//! The crate never opens windows or reads images itself. Whatever shows the
//! calibration screenshots and captures mouse clicks plugs in here through
//! [`ClickSource`].

pub mod calibration;

pub use calibration::{
    ClickSource, Edge, EdgeClicks, calibrate, scale_border_clicks, start_from_click,
};
