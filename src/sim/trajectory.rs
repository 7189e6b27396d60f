//! Fixed-step ray stepping with wall reflections
//!
//! The ray advances by a constant step along its current angle. After every
//! step the position is classified against the border; a hit reflects the
//! angle and is recorded. The position is never pulled back inside after a
//! reflection, so the next step starts from wherever the ray ended up.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::border::Border;
use super::hit::{HitKind, classify_hit, reflect};
use crate::consts::{DEFAULT_REFLECTION_LIMIT, STEP_SIZE};
use crate::error::{Error, Result};
use crate::step_along;

/// Stepping parameters for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Distance advanced per step (logical pixels)
    pub step_size: f64,
    /// Number of wall hits to record before stopping
    pub reflection_limit: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            step_size: STEP_SIZE,
            reflection_limit: DEFAULT_REFLECTION_LIMIT,
        }
    }
}

/// A single wall hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// Position right after the step that crossed the wall (unrounded)
    pub position: DVec2,
    pub hit: HitKind,
    /// Travel angle after reflection (radians)
    pub angle: f64,
}

/// Stepping state: where the ray is and where it is heading
///
/// Yields one [`Bounce`] per wall hit, forever, until an error occurs.
#[derive(Debug, Clone)]
pub struct Tracer {
    border: Border,
    position: DVec2,
    angle: f64,
    step_size: f64,
    failed: bool,
}

impl Tracer {
    /// `angle` is in radians
    pub fn new(start: DVec2, angle: f64, border: Border, step_size: f64) -> Result<Self> {
        check_finite("start x", start.x)?;
        check_finite("start y", start.y)?;
        check_finite("angle", angle)?;
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(Error::InvalidStepSize(step_size));
        }

        Ok(Self {
            border,
            position: start,
            angle,
            step_size,
            failed: false,
        })
    }

    /// Step until the next wall hit
    fn advance(&mut self) -> Result<Bounce> {
        loop {
            let next = self.position + step_along(self.step_size, self.angle);
            if next == self.position {
                // Step is below float resolution at this position
                return Err(Error::InvalidStepSize(self.step_size));
            }
            self.position = next;

            let hit = classify_hit(next.x, next.y, &self.border)?;
            if hit.is_hit() {
                self.angle = reflect(self.angle, hit);
                return Ok(Bounce {
                    position: next,
                    hit,
                    angle: self.angle,
                });
            }
        }
    }
}

impl Iterator for Tracer {
    type Item = Result<Bounce>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let bounce = self.advance();
        self.failed = bounce.is_err();
        Some(bounce)
    }
}

/// Start point followed by the rounded position of every wall hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<DVec2>,
}

impl Trajectory {
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// The untouched start position
    pub fn start(&self) -> DVec2 {
        self.points[0]
    }

    /// Number of points, start included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as whole pixels, for drawing
    pub fn pixels(&self) -> Vec<IVec2> {
        self.points.iter().map(|p| p.round().as_ivec2()).collect()
    }
}

/// Simulate with the fixed 0.1 step size
///
/// Returns `reflection_limit + 1` points: `start` as given, then one rounded
/// point per wall hit.
pub fn simulate(
    start: DVec2,
    initial_angle_degrees: f64,
    border: &Border,
    reflection_limit: usize,
) -> Result<Trajectory> {
    simulate_with(
        start,
        initial_angle_degrees,
        border,
        &SimParams {
            step_size: STEP_SIZE,
            reflection_limit,
        },
    )
}

/// Simulate with explicit stepping parameters
pub fn simulate_with(
    start: DVec2,
    initial_angle_degrees: f64,
    border: &Border,
    params: &SimParams,
) -> Result<Trajectory> {
    if !border.is_well_formed() {
        log::warn!(
            "Simulating inside malformed border L={} R={} U={} D={}",
            border.left,
            border.right,
            border.up,
            border.down
        );
    }

    let tracer = Tracer::new(
        start,
        initial_angle_degrees.to_radians(),
        *border,
        params.step_size,
    )?;

    let bounces = tracer.take(params.reflection_limit).map(|bounce| -> Result<DVec2> {
        let bounce = bounce?;
        log::debug!(
            "{:?} hit at ({:.2}, {:.2}), heading {:.1}°",
            bounce.hit,
            bounce.position.x,
            bounce.position.y,
            bounce.angle.to_degrees()
        );
        // + 0.0 turns a rounded -0.0 into 0.0
        Ok(bounce.position.round() + DVec2::ZERO)
    });
    let points = std::iter::once(Ok(start))
        .chain(bounces)
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Trajectory from ({}, {}) at {}°: {} reflections",
        start.x,
        start.y,
        initial_angle_degrees,
        points.len() - 1
    );

    Ok(Trajectory { points })
}

fn check_finite(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteInput { what, value })
    }
}
