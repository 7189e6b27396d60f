//! Line generation for the border and trajectory overlay

use glam::IVec2;
use serde::Serialize;

use crate::sim::{Border, Trajectory};

/// Border outline color (white)
pub const BORDER_COLOR: [u8; 3] = [255, 255, 255];
pub const BORDER_THICKNESS: u32 = 10;

/// Trajectory color (blue)
pub const TRAJECTORY_COLOR: [u8; 3] = [255, 0, 0];
pub const TRAJECTORY_THICKNESS: u32 = 4;

/// A straight stroke between two pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub from: IVec2,
    pub to: IVec2,
    /// BGR, as image libraries on the capture side expect
    pub color: [u8; 3],
    pub thickness: u32,
}

impl Line {
    fn border(from: IVec2, to: IVec2) -> Self {
        Self {
            from,
            to,
            color: BORDER_COLOR,
            thickness: BORDER_THICKNESS,
        }
    }
}

/// The four border edges: left, right, top, bottom
pub fn border_lines(border: &Border) -> [Line; 4] {
    let [top_left, top_right, bottom_right, bottom_left] = border.corners();
    [
        Line::border(top_left, bottom_left),
        Line::border(top_right, bottom_right),
        Line::border(top_left, top_right),
        Line::border(bottom_left, bottom_right),
    ]
}

/// One line per consecutive pair of trajectory points
pub fn trajectory_lines(trajectory: &Trajectory) -> Vec<Line> {
    trajectory
        .pixels()
        .windows(2)
        .map(|pair| Line {
            from: pair[0],
            to: pair[1],
            color: TRAJECTORY_COLOR,
            thickness: TRAJECTORY_THICKNESS,
        })
        .collect()
}

/// Scale a line to display pixels (truncating, like an image resize)
pub fn scale_line(line: Line, scale: f64) -> Line {
    let scale_point = |p: IVec2| (p.as_dvec2() * scale).as_ivec2();
    Line {
        from: scale_point(line.from),
        to: scale_point(line.to),
        ..line
    }
}

/// Border and trajectory together, scaled for display
pub fn overlay(border: &Border, trajectory: &Trajectory, scale: f64) -> Vec<Line> {
    border_lines(border)
        .into_iter()
        .chain(trajectory_lines(trajectory))
        .map(|line| scale_line(line, scale))
        .collect()
}
