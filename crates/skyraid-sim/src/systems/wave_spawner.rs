//! Wave spawning system: deploys enemy waves at scheduled times.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyraid_core::constants::{
    RANDOM_WAVE_ANGLE_RANGE_DEG, RANDOM_WAVE_INTERVAL_SECS, RANDOM_WAVE_MAX_WAIT_SECS,
};
use skyraid_core::enums::MoveType;
use skyraid_core::events::GameEvent;

use crate::config::EnemyTuning;
use crate::registry::EnemyRegistry;
use crate::score::ScoreState;
use crate::world_setup;

/// One enemy to deploy. Unset speed and shake width fall back to `EnemyTuning`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Deployment angle in degrees (0 = straight ahead).
    pub angle_deg: f32,
    #[serde(default)]
    pub move_type: MoveType,
    /// Seconds to idle after deployment.
    #[serde(default)]
    pub wait_time: f32,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub shake_width: Option<f32>,
}

/// A single wave definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveEntry {
    /// Mission time at which this wave deploys.
    pub spawn_at_secs: f64,
    pub enemies: Vec<EnemySpawn>,
    /// Whether this wave has already been spawned.
    #[serde(skip)]
    pub spawned: bool,
}

/// The complete wave schedule for a mission.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl EnemySpawn {
    pub fn new(angle_deg: f32, move_type: MoveType) -> Self {
        Self {
            angle_deg,
            move_type,
            wait_time: 0.0,
            speed: None,
            shake_width: None,
        }
    }

    pub fn straight(angle_deg: f32) -> Self {
        Self::new(angle_deg, MoveType::Straight)
    }

    pub fn shake(angle_deg: f32) -> Self {
        Self::new(angle_deg, MoveType::Shake)
    }

    pub fn with_wait(mut self, wait_time: f32) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }
}

impl WaveEntry {
    pub fn new(spawn_at_secs: f64, enemies: Vec<EnemySpawn>) -> Self {
        Self {
            spawn_at_secs,
            enemies,
            spawned: false,
        }
    }
}

impl WaveSchedule {
    pub fn from_entries(entries: Vec<WaveEntry>) -> Self {
        let waves = entries
            .into_iter()
            .map(|wave| WaveEntry {
                spawned: false,
                ..wave
            })
            .collect();
        Self { waves }
    }

    /// Default 3-wave mission with escalating difficulty.
    pub fn default_mission() -> Self {
        Self::from_entries(vec![
            WaveEntry::new(
                0.0,
                vec![
                    EnemySpawn::straight(0.0),
                    EnemySpawn::shake(-30.0).with_wait(1.0),
                ],
            ),
            WaveEntry::new(
                8.0,
                vec![
                    EnemySpawn::straight(30.0),
                    EnemySpawn::shake(-60.0).with_wait(0.5),
                    EnemySpawn::straight(15.0).with_wait(2.0),
                ],
            ),
            WaveEntry::new(
                16.0,
                vec![
                    EnemySpawn::shake(0.0),
                    EnemySpawn::shake(45.0).with_wait(1.0),
                    EnemySpawn::straight(-45.0).with_wait(1.5),
                    EnemySpawn::straight(60.0),
                ],
            ),
        ])
    }

    /// `count` single-enemy waves at random angles, move types and wait times.
    pub fn random(rng: &mut ChaCha8Rng, count: u32) -> Self {
        let waves = (0..count)
            .map(|i| {
                let angle_deg =
                    rng.gen_range(-RANDOM_WAVE_ANGLE_RANGE_DEG..=RANDOM_WAVE_ANGLE_RANGE_DEG);
                let move_type = if rng.gen_bool(0.5) {
                    MoveType::Shake
                } else {
                    MoveType::Straight
                };
                let wait_time = rng.gen_range(0.0..RANDOM_WAVE_MAX_WAIT_SECS);
                WaveEntry::new(
                    i as f64 * RANDOM_WAVE_INTERVAL_SECS,
                    vec![EnemySpawn::new(angle_deg, move_type).with_wait(wait_time)],
                )
            })
            .collect();
        Self { waves }
    }

    /// Total number of enemies across all waves.
    pub fn total_enemies(&self) -> u32 {
        self.waves.iter().map(|w| w.enemies.len() as u32).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.waves.iter().all(|w| w.spawned)
    }
}

/// Check schedule and spawn any due waves. Returns the number of enemies deployed.
pub fn run(
    world: &mut World,
    registry: &mut EnemyRegistry,
    schedule: &mut WaveSchedule,
    elapsed_secs: f64,
    tuning: &EnemyTuning,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) -> u32 {
    let mut deployed = 0;
    for wave in &mut schedule.waves {
        if !wave.spawned && elapsed_secs >= wave.spawn_at_secs {
            for spawn in &wave.enemies {
                let enemy = world_setup::spawn_enemy(world, registry, spawn, tuning);
                events.push(GameEvent::EnemyDeployed {
                    enemy: enemy.to_bits().get(),
                    angle_deg: spawn.angle_deg,
                    move_type: spawn.move_type,
                });
                deployed += 1;
            }
            wave.spawned = true;
        }
    }
    score.enemies_deployed += deployed;
    deployed
}
