//! Border calibration from screen clicks
//!
//! The user is shown one screenshot per edge, scaled by `scale` to fit the
//! monitor, and clicks on that edge. Only the relevant axis of each click is
//! kept: x for the left/right edges, y for the up/down edges. Clicks are
//! mapped back to logical pixels by dividing by `scale` and truncating.

use std::collections::HashMap;

use glam::{DVec2, IVec2};

use crate::error::{Error, Result};
use crate::sim::Border;

/// One side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Up,
    Right,
    Down,
}

impl Edge {
    /// Order in which the edges are presented for clicking
    pub const CAPTURE_ORDER: [Edge; 4] = [Edge::Left, Edge::Up, Edge::Right, Edge::Down];

    /// Key of this edge in the border record
    pub fn key(self) -> &'static str {
        match self {
            Edge::Left => "L",
            Edge::Up => "U",
            Edge::Right => "R",
            Edge::Down => "D",
        }
    }
}

/// Anything that can capture a click for one edge
///
/// `scale` is the factor the screenshot was resized by before display; the
/// returned click is in those displayed pixels. `None` means the user closed
/// the view without clicking.
pub trait ClickSource {
    fn click(&mut self, edge: Edge, scale: f64) -> Option<IVec2>;
}

/// Clicks captured per edge (or scripted for tests and replays)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeClicks {
    clicks: HashMap<Edge, IVec2>,
}

impl EdgeClicks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, edge: Edge, click: IVec2) -> Self {
        self.insert(edge, click);
        self
    }

    /// Record a click, replacing an earlier one for the same edge
    pub fn insert(&mut self, edge: Edge, click: IVec2) {
        self.clicks.insert(edge, click);
    }

    pub fn get(&self, edge: Edge) -> Option<IVec2> {
        self.clicks.get(&edge).copied()
    }
}

impl ClickSource for EdgeClicks {
    fn click(&mut self, edge: Edge, _scale: f64) -> Option<IVec2> {
        self.get(edge)
    }
}

/// Ask `source` for all four edges and build the border in logical pixels
pub fn calibrate<S: ClickSource + ?Sized>(source: &mut S, scale: f64) -> Result<Border> {
    check_scale(scale)?;

    let mut clicks = EdgeClicks::new();
    for edge in Edge::CAPTURE_ORDER {
        match source.click(edge, scale) {
            Some(click) => {
                log::info!("Selected coordinate for {}: ({},{})", edge.key(), click.x, click.y);
                clicks.insert(edge, click);
            }
            None => log::warn!("No click captured for edge {}", edge.key()),
        }
    }

    scale_border_clicks(&clicks, 1.0 / scale)
}

/// Multiply each edge's relevant axis by `factor`, truncating toward zero
pub fn scale_border_clicks(clicks: &EdgeClicks, factor: f64) -> Result<Border> {
    let click = |edge: Edge| clicks.get(edge).ok_or(Error::MissingField(edge.key()));

    let left = scale_coord(click(Edge::Left)?.x, factor);
    let right = scale_coord(click(Edge::Right)?.x, factor);
    let up = scale_coord(click(Edge::Up)?.y, factor);
    let down = scale_coord(click(Edge::Down)?.y, factor);

    Border::new(left, right, up, down)
}

/// Map a click on a scaled screenshot back to logical pixels
pub fn start_from_click(click: IVec2, scale: f64) -> Result<DVec2> {
    check_scale(scale)?;
    Ok(click.as_dvec2() / scale)
}

#[inline]
fn scale_coord(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor) as i32
}

fn check_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidScale(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks() -> EdgeClicks {
        EdgeClicks::new()
            .with(Edge::Left, IVec2::new(40, 300))
            .with(Edge::Up, IVec2::new(200, 20))
            .with(Edge::Right, IVec2::new(400, 310))
            .with(Edge::Down, IVec2::new(210, 800))
    }

    /// Records the order edges were asked for
    struct Recorder {
        asked: Vec<Edge>,
        inner: EdgeClicks,
    }

    impl ClickSource for Recorder {
        fn click(&mut self, edge: Edge, _scale: f64) -> Option<IVec2> {
            self.asked.push(edge);
            self.inner.get(edge)
        }
    }

    #[test]
    fn test_calibrate_scales_back_up() {
        let border = calibrate(&mut clicks(), 0.4).unwrap();
        assert_eq!(border, Border::new(100, 1000, 50, 2000).unwrap());
    }

    #[test]
    fn test_capture_order() {
        let mut recorder = Recorder {
            asked: Vec::new(),
            inner: clicks(),
        };
        calibrate(&mut recorder, 0.5).unwrap();
        assert_eq!(recorder.asked, Edge::CAPTURE_ORDER.to_vec());
    }

    #[test]
    fn test_scaling_truncates() {
        let clicks = EdgeClicks::new()
            .with(Edge::Left, IVec2::new(3, 0))
            .with(Edge::Up, IVec2::new(0, 3))
            .with(Edge::Right, IVec2::new(9, 0))
            .with(Edge::Down, IVec2::new(0, 9));
        let border = scale_border_clicks(&clicks, 2.5).unwrap();
        assert_eq!(border, Border::new(7, 22, 7, 22).unwrap());
    }

    #[test]
    fn test_missing_click_is_missing_field() {
        let mut partial = EdgeClicks::new()
            .with(Edge::Left, IVec2::new(1, 1))
            .with(Edge::Up, IVec2::new(1, 1))
            .with(Edge::Right, IVec2::new(5, 5));
        let err = calibrate(&mut partial, 1.0).unwrap_err();
        assert!(matches!(err, Error::MissingField("D")));
    }

    #[test]
    fn test_inverted_clicks_rejected() {
        let swapped = EdgeClicks::new()
            .with(Edge::Left, IVec2::new(400, 0))
            .with(Edge::Up, IVec2::new(0, 20))
            .with(Edge::Right, IVec2::new(40, 0))
            .with(Edge::Down, IVec2::new(0, 800));
        assert!(matches!(
            scale_border_clicks(&swapped, 1.0),
            Err(Error::InvalidBorder { .. })
        ));
    }

    #[test]
    fn test_start_from_click() {
        let start = start_from_click(IVec2::new(200, 301), 0.4).unwrap();
        assert!((start.x - 500.0).abs() < 1e-9);
        assert!((start.y - 752.5).abs() < 1e-9);
        assert!(matches!(
            start_from_click(IVec2::ONE, 0.0),
            Err(Error::InvalidScale(_))
        ));
    }

    #[test]
    fn test_edge_keys_match_record() {
        let keys: Vec<_> = Edge::CAPTURE_ORDER.iter().map(|e| e.key()).collect();
        assert_eq!(keys, ["L", "U", "R", "D"]);
    }
}
