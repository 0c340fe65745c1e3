//! Discrete-time ballistic projectile simulation.
//!
//! The trajectory is re-evaluated from the launch point on every tick rather
//! than integrated incrementally, so rounding never accumulates.

use crate::constants::{
    DEFAULT_ANGLE, DEFAULT_POWER, HIT_COLUMN_TOLERANCE, HIT_ROW_TOLERANCE, TICK_STEP,
};
use crate::terrain::Terrain;

/// Player-controlled launch parameters. Both are unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    /// Degrees counter-clockwise from the positive x axis.
    pub angle: f64,
    pub power: f64,
}

impl Default for Aim {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            power: DEFAULT_POWER,
        }
    }
}

/// A discrete cell of the terrain grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub column: usize,
    pub row: i32,
}

/// Everything needed to evaluate a trajectory at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub launch_x: f64,
    pub launch_y: f64,
    pub angle_rad: f64,
    pub power: f64,
    pub gravity: f64,
}

impl Shot {
    /// Launch from the surface of `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is outside the terrain. Match construction only
    /// places the tank on valid columns.
    pub fn from_column(terrain: &Terrain, column: usize, aim: Aim, gravity: f64) -> Self {
        Self {
            launch_x: column as f64,
            launch_y: f64::from(terrain.heights()[column]),
            angle_rad: aim.angle.to_radians(),
            power: aim.power,
            gravity,
        }
    }

    /// Exact position after `t` time units of flight.
    pub fn position_at(&self, t: f64) -> (f64, f64) {
        let x = self.launch_x + self.power * self.angle_rad.cos() * t;
        let y = self.launch_y + self.power * self.angle_rad.sin() * t
            - 0.5 * self.gravity * t * t;
        (x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// Left the terrain horizontally.
    OutOfBounds,
    /// Reached or dropped below the terrain surface.
    Ground,
}

/// Classification of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    InFlight(Position),
    Hit(Position),
    Miss(MissReason),
}

impl ShotOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ShotOutcome::InFlight(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    pub elapsed: f64,
    pub outcome: ShotOutcome,
}

/// Classify a real-valued projectile position.
///
/// Bounds are checked first, then the ground, then the target band. A
/// projectile at or below the surface is a miss even inside the target band.
pub fn classify(terrain: &Terrain, target_column: usize, x: f64, y: f64) -> ShotOutcome {
    let column = x.round() as i64;
    let Some(ground) = terrain.height_at(column) else {
        return ShotOutcome::Miss(MissReason::OutOfBounds);
    };
    if y <= f64::from(ground) {
        return ShotOutcome::Miss(MissReason::Ground);
    }

    let position = Position {
        column: column as usize,
        row: y.round() as i32,
    };
    let near_target = (target_column as i64 - column).abs() <= HIT_COLUMN_TOLERANCE;
    let level_with_target = terrain
        .heights()
        .get(target_column)
        .is_some_and(|&h| (position.row - h).abs() <= HIT_ROW_TOLERANCE);
    if near_target && level_with_target {
        ShotOutcome::Hit(position)
    } else {
        ShotOutcome::InFlight(position)
    }
}

/// Step the simulation clock by one tick and classify the new position.
pub fn advance(terrain: &Terrain, shot: &Shot, target_column: usize, elapsed: f64) -> TickResult {
    let elapsed = elapsed + TICK_STEP;
    let (x, y) = shot.position_at(elapsed);
    TickResult {
        elapsed,
        outcome: classify(terrain, target_column, x, y),
    }
}
