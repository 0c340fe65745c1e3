//! Fixed game constants.

use std::time::Duration;

// Terrain
pub const TERRAIN_WIDTH: usize = 100;
pub const TERRAIN_OCTAVES: u32 = 6;
/// Base ("naive") heights are drawn uniformly from this half-open range.
pub const BASE_HEIGHT_MIN: f64 = 5.0;
pub const BASE_HEIGHT_MAX: f64 = 15.0;

// Display grid
/// Highest row drawn; rows run from this value down to 0.
pub const DISPLAY_MAX_ROW: i32 = 30;

// Physics
pub const DEFAULT_GRAVITY: f64 = 9.81;
/// Simulated time added per tick.
pub const TICK_STEP: f64 = 0.1;
/// Wall-clock delay between simulation ticks.
pub const TICK_DELAY: Duration = Duration::from_millis(100);
/// Wall-clock delay between a miss and the regenerated match.
pub const RESET_DELAY: Duration = Duration::from_secs(2);

// Hit detection
pub const HIT_COLUMN_TOLERANCE: i64 = 3;
pub const HIT_ROW_TOLERANCE: i32 = 2;

// Aim
pub const DEFAULT_ANGLE: f64 = 45.0;
pub const DEFAULT_POWER: f64 = 20.0;
pub const ANGLE_STEP: f64 = 5.0;
pub const POWER_STEP: f64 = 1.0;

// Placement (inclusive ranges)
pub const TANK_COLUMN_MIN: usize = 1;
pub const TANK_COLUMN_MAX: usize = 5;
pub const TARGET_COLUMN_MIN: usize = 75;
pub const TARGET_COLUMN_MAX: usize = 79;

// Event loop
/// Upper bound on how long the main loop blocks waiting for input.
pub const INPUT_POLL_MS: u64 = 50;
