//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Largest tick length a config may ask for, in seconds.
pub const MAX_DT: f32 = 1.0;

/// Fastest playback speed `SetTimeScale` accepts.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Ship ---

/// Seconds the ship must wait between two shots.
pub const CAN_SHOT_TIME: f32 = 0.5;

/// Yaw rate while a rotation key is held (rad/s).
pub const SHIP_ROT_SPEED: f32 = 1.5;

/// Roll applied while banking into a turn (rad).
pub const SHIP_ROT_TILT: f32 = 0.3;

/// Pitch given to missiles fired with the up/down modifier held (rad).
pub const SHOT_ROT_VERTICAL: f32 = 0.2;

/// Distance ahead of the ship at which missiles appear.
pub const MISSILE_SPAWN_OFFSET: f32 = 3.0;

pub const SHIP_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 0.5, 1.5);

// --- Enemy ---

/// Distance from the origin at which enemies are deployed.
pub const ENEMY_APPEAR_DISTANCE: f32 = 50.0;

/// Default approach speed (units/s).
pub const ENEMY_SPEED: f32 = 5.0;

/// Default vertical amplitude of the shake pattern.
pub const ENEMY_SHAKE_WIDTH: f32 = 5.0;

/// Elapsed time is divided by this before taking the shake sine.
pub const ENEMY_SHAKE_TIME_DIVISOR: f32 = 0.2;

/// Enemies stop once both |x| and |z| are within this distance of the origin.
pub const ENEMY_ARRIVAL_RADIUS: f32 = 1.0;

/// Yaw value (or yaw rate, see `HappySpin`) used once an enemy arrives.
pub const ENEMY_HAPPY_ROT_SPEED: f32 = 0.5;

pub const ENEMY_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// --- Missile ---

/// Missile flight speed (units/s).
pub const MISSILE_SPEED: f32 = 40.0;

/// Seconds before an unspent missile expires.
pub const MISSILE_LIFETIME_SECS: f32 = 3.0;

pub const MISSILE_HALF_EXTENTS: Vec3 = Vec3::new(0.25, 0.25, 0.75);

// --- Explosion ---

/// Seconds an explosion effect stays in the world.
pub const BOMB_LIFETIME_SECS: f32 = 1.0;

// --- Wave spawning ---

/// Half-width of the deployment arc used by random waves (degrees).
pub const RANDOM_WAVE_ANGLE_RANGE_DEG: f32 = 60.0;

/// Seconds between consecutive random waves.
pub const RANDOM_WAVE_INTERVAL_SECS: f64 = 4.0;

/// Longest idle time given to a randomly deployed enemy (seconds).
pub const RANDOM_WAVE_MAX_WAIT_SECS: f32 = 2.0;
