//! Events emitted by the simulation for audio and UI feedback.
//!
//! Entity ids are hecs entity bits (`Entity::to_bits`).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::MoveType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new enemy appeared at its deployment point.
    EnemyDeployed {
        enemy: u64,
        angle_deg: f32,
        move_type: MoveType,
    },
    /// The ship fired a missile.
    ShotFired { position: Vec3, pitch: f32 },
    /// A missile struck an enemy.
    EnemyHit { enemy: u64, missile: u64 },
    /// An enemy reached the origin and stopped.
    EnemyArrived { enemy: u64 },
    /// An enemy left the world (its marker is going with it).
    EnemyDestroyed { enemy: u64, marker: Option<u64> },
    /// The ship collided with an enemy.
    ShipDestroyed { position: Vec3, enemy: u64 },
}
