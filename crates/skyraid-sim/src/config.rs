//! Simulation configuration.
//!
//! Every field has a default drawn from `skyraid_core::constants`, so a
//! config file only needs to name what it changes.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use skyraid_core::constants::*;
use skyraid_core::enums::HappySpin;
use skyraid_core::{Result, SkyraidError};

use crate::systems::wave_spawner::WaveEntry;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Seconds per tick used by `SimulationEngine::tick`.
    pub dt: f32,
    /// Playback speed of the real-time loop (1.0 = normal).
    pub time_scale: f64,
    pub ship: ShipTuning,
    pub enemy: EnemyTuning,
    pub missile: MissileTuning,
    pub bomb_lifetime_secs: f32,
    /// Explicit wave schedule. Takes precedence over `random_waves`.
    pub waves: Option<Vec<WaveEntry>>,
    /// Number of randomly deployed enemies, one per wave.
    pub random_waves: Option<u32>,
    /// Arrived enemies keep turning instead of freezing their yaw.
    pub happy_spin_accumulates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub rot_speed: f32,
    pub rot_tilt: f32,
    pub shot_rot_vertical: f32,
    pub can_shot_time: f32,
    pub half_extents: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub appear_distance: f32,
    pub speed: f32,
    pub shake_width: f32,
    pub happy_rot_speed: f32,
    pub half_extents: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileTuning {
    pub speed: f32,
    pub lifetime_secs: f32,
    pub half_extents: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            time_scale: 1.0,
            ship: ShipTuning::default(),
            enemy: EnemyTuning::default(),
            missile: MissileTuning::default(),
            bomb_lifetime_secs: BOMB_LIFETIME_SECS,
            waves: None,
            random_waves: None,
            happy_spin_accumulates: false,
        }
    }
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            rot_speed: SHIP_ROT_SPEED,
            rot_tilt: SHIP_ROT_TILT,
            shot_rot_vertical: SHOT_ROT_VERTICAL,
            can_shot_time: CAN_SHOT_TIME,
            half_extents: SHIP_HALF_EXTENTS,
        }
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            appear_distance: ENEMY_APPEAR_DISTANCE,
            speed: ENEMY_SPEED,
            shake_width: ENEMY_SHAKE_WIDTH,
            happy_rot_speed: ENEMY_HAPPY_ROT_SPEED,
            half_extents: ENEMY_HALF_EXTENTS,
        }
    }
}

impl Default for MissileTuning {
    fn default() -> Self {
        Self {
            speed: MISSILE_SPEED,
            lifetime_secs: MISSILE_LIFETIME_SECS,
            half_extents: MISSILE_HALF_EXTENTS,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn happy_spin(&self) -> HappySpin {
        if self.happy_spin_accumulates {
            HappySpin::Accumulate
        } else {
            HappySpin::Absolute
        }
    }

    /// Reject values the systems cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 || self.dt > MAX_DT {
            return Err(invalid(format!(
                "dt must be in (0, {MAX_DT}], got {}",
                self.dt
            )));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(invalid(format!(
                "time_scale must be non-negative, got {}",
                self.time_scale
            )));
        }
        if self.ship.can_shot_time < 0.0 {
            return Err(invalid(format!(
                "ship.can_shot_time must be non-negative, got {}",
                self.ship.can_shot_time
            )));
        }
        if !self.enemy.appear_distance.is_finite() || self.enemy.appear_distance <= 0.0 {
            return Err(invalid(format!(
                "enemy.appear_distance must be positive, got {}",
                self.enemy.appear_distance
            )));
        }
        if self.missile.lifetime_secs < 0.0 || self.bomb_lifetime_secs < 0.0 {
            return Err(invalid("lifetimes must be non-negative".to_string()));
        }
        if let Some(waves) = &self.waves {
            for wave in waves {
                if wave.spawn_at_secs < 0.0 {
                    return Err(invalid(format!(
                        "wave spawn time must be non-negative, got {}",
                        wave.spawn_at_secs
                    )));
                }
                if wave.enemies.iter().any(|e| e.wait_time < 0.0) {
                    return Err(invalid("enemy wait_time must be non-negative".to_string()));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> SkyraidError {
    SkyraidError::InvalidConfig(message)
}
