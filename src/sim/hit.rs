//! Wall hit detection and angle reflection
//!
//! Walls are axis-aligned, so reflection is done directly on the travel
//! angle instead of on a velocity vector.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::border::Border;
use crate::error::{Error, Result};

/// Which part of the border a position has crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    None,
    Left,
    Right,
    Up,
    Down,
    /// One vertical and one horizontal wall crossed in the same step
    Corner,
}

impl HitKind {
    pub fn is_hit(self) -> bool {
        self != HitKind::None
    }
}

/// Classify a position against the border
///
/// Conditions are checked in the order left, right, up, down; every true
/// condition overwrites the candidate side. The number of true conditions
/// then decides: one is a single wall, two is a corner, three or more can
/// only happen with a malformed border and is reported as an error.
pub fn classify_hit(x: f64, y: f64, border: &Border) -> Result<HitKind> {
    let mut hit = HitKind::None;
    let mut planes = 0;

    if x < f64::from(border.left) {
        hit = HitKind::Left;
        planes += 1;
    }
    if x > f64::from(border.right) {
        hit = HitKind::Right;
        planes += 1;
    }
    if y < f64::from(border.up) {
        hit = HitKind::Up;
        planes += 1;
    }
    if y > f64::from(border.down) {
        hit = HitKind::Down;
        planes += 1;
    }

    match planes {
        0 | 1 => Ok(hit),
        2 => Ok(HitKind::Corner),
        _ => Err(Error::InvalidBorderState { x, y, planes }),
    }
}

/// Reflect a travel angle off the wall that was hit
///
/// # Panics
///
/// Panics on `HitKind::None`; there is nothing to reflect off.
#[inline]
pub fn reflect(angle: f64, hit: HitKind) -> f64 {
    match hit {
        // Vertical wall: flip the horizontal component
        HitKind::Left | HitKind::Right => PI - angle,
        // Horizontal wall: flip the vertical component
        HitKind::Up | HitKind::Down => -angle,
        HitKind::Corner => angle + PI,
        HitKind::None => panic!("reflect called without a wall hit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step_along;
    use proptest::prelude::*;

    fn square() -> Border {
        Border::new(0, 1000, 0, 1000).unwrap()
    }

    /// Equal modulo 2π
    fn same_angle(a: f64, b: f64) -> bool {
        let diff = (a - b).rem_euclid(2.0 * PI);
        diff.min(2.0 * PI - diff) < 1e-9
    }

    #[test]
    fn test_single_walls() {
        let b = square();
        assert_eq!(classify_hit(-0.1, 500.0, &b).unwrap(), HitKind::Left);
        assert_eq!(classify_hit(1000.1, 500.0, &b).unwrap(), HitKind::Right);
        assert_eq!(classify_hit(500.0, -0.1, &b).unwrap(), HitKind::Up);
        assert_eq!(classify_hit(500.0, 1000.1, &b).unwrap(), HitKind::Down);
    }

    #[test]
    fn test_on_the_line_is_not_a_hit() {
        let b = square();
        assert_eq!(classify_hit(0.0, 0.0, &b).unwrap(), HitKind::None);
        assert_eq!(classify_hit(1000.0, 1000.0, &b).unwrap(), HitKind::None);
    }

    #[test]
    fn test_corners() {
        let b = square();
        for (x, y) in [(-1.0, -1.0), (1001.0, -1.0), (-1.0, 1001.0), (1001.0, 1001.0)] {
            assert_eq!(classify_hit(x, y, &b).unwrap(), HitKind::Corner);
        }
    }

    #[test]
    fn test_three_planes_is_invalid_state() {
        // Inverted x range: every x is either < L or > R, often both
        let b = Border {
            left: 100,
            right: 0,
            up: 0,
            down: 100,
        };
        let err = classify_hit(50.0, 150.0, &b).unwrap_err();
        assert!(matches!(err, Error::InvalidBorderState { planes: 3, .. }));
    }

    #[test]
    fn test_reflect_vertical_wall() {
        // Moving right, bounce off the right wall, now moving left
        let out = reflect(0.0, HitKind::Right);
        assert!(same_angle(out, PI));
        let dir = step_along(1.0, out);
        assert!((dir.x + 1.0).abs() < 1e-12);
        assert!(dir.y.abs() < 1e-12);
    }

    #[test]
    fn test_reflect_horizontal_wall_keeps_horizontal_motion() {
        let angle = 30f64.to_radians();
        let before = step_along(1.0, angle);
        let after = step_along(1.0, reflect(angle, HitKind::Down));
        assert!((before.x - after.x).abs() < 1e-12);
        assert!((before.y + after.y).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_corner_reverses() {
        let angle = 45f64.to_radians();
        let before = step_along(1.0, angle);
        let after = step_along(1.0, reflect(angle, HitKind::Corner));
        assert!((before + after).length() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "without a wall hit")]
    fn test_reflect_none_panics() {
        reflect(1.0, HitKind::None);
    }

    proptest! {
        #[test]
        fn prop_inside_is_none(
            l in -5000i32..5000, w in 1i32..5000,
            u in -5000i32..5000, h in 1i32..5000,
            fx in 0.001f64..0.999, fy in 0.001f64..0.999,
        ) {
            let b = Border::new(l, l + w, u, u + h).unwrap();
            let x = f64::from(l) + fx * f64::from(w);
            let y = f64::from(u) + fy * f64::from(h);
            prop_assert_eq!(classify_hit(x, y, &b).unwrap(), HitKind::None);
        }

        #[test]
        fn prop_one_x_and_one_y_is_corner(
            left_side in any::<bool>(), top_side in any::<bool>(),
            dx in 0.01f64..100.0, dy in 0.01f64..100.0,
        ) {
            let b = Border::new(0, 200, 0, 300).unwrap();
            let x = if left_side { -dx } else { 200.0 + dx };
            let y = if top_side { -dy } else { 300.0 + dy };
            prop_assert_eq!(classify_hit(x, y, &b).unwrap(), HitKind::Corner);
        }

        #[test]
        fn prop_wall_reflection_is_involution(theta in -20.0f64..20.0) {
            for hit in [HitKind::Left, HitKind::Right, HitKind::Up, HitKind::Down] {
                prop_assert!(same_angle(reflect(reflect(theta, hit), hit), theta));
            }
        }
    }
}
