//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::MoveType;
use crate::types::Aabb;

/// The player-controlled ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Left rotation intent seen by the latest input pass.
    pub rotating_left: bool,
    /// Right rotation intent seen by the latest input pass.
    pub rotating_right: bool,
    /// Intents as they were at the previous update (for edge detection).
    pub was_rotating_left: bool,
    pub was_rotating_right: bool,
    /// Seconds accumulated since the last shot while reloading.
    pub shot_cooldown: f32,
    pub can_shoot: bool,
    pub can_shot_time: f32,
    pub rot_speed: f32,
    pub rot_tilt: f32,
    pub shot_rot_vertical: f32,
}

/// An AI-driven enemy flying toward the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub move_type: MoveType,
    pub speed: f32,
    pub shake_width: f32,
    /// Seconds since deployment.
    pub time_count: f32,
    /// Seconds the enemy idles after deployment before moving.
    pub wait_time: f32,
    /// Deployment position, frozen at spawn.
    pub initial_position: Vec3,
    pub happy_rot_speed: f32,
    pub deploy_angle_deg: f32,
    pub arrived: bool,
}

/// Radar/minimap indicator belonging to one enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Marker;

/// A missile fired by the ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile {
    pub speed: f32,
    pub remaining_secs: f32,
}

/// Explosion effect left where the ship was destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bomb {
    pub remaining_secs: f32,
}

/// Stand-in for the destroyed ship that the camera keeps tracking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraAnchor;

/// Object-space collision box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub object_box: Aabb,
}
