//! Game state snapshot: the complete visible state handed to the front end each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, Transform};

/// Complete game state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// `None` once the ship has been destroyed and reaped.
    pub ship: Option<ShipView>,
    pub enemies: Vec<EnemyView>,
    pub markers: Vec<MarkerView>,
    pub missiles: Vec<MissileView>,
    pub bombs: Vec<BombView>,
    pub camera: CameraView,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub transform: Transform,
    pub state: LifeState,
    pub can_shoot: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub transform: Transform,
    pub state: LifeState,
    pub move_type: MoveType,
    /// Deployment angle in degrees (0 = straight ahead).
    pub deploy_angle_deg: f32,
    pub speed: f32,
    pub arrived: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerView {
    pub id: u64,
    /// Enemy the marker indicates.
    pub target: u64,
    pub state: LifeState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: u64,
    pub transform: Transform,
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombView {
    pub id: u64,
    pub transform: Transform,
    pub remaining_secs: f32,
}

/// What the camera is looking at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub target: Option<u64>,
    pub focus: Option<Transform>,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_deployed: u32,
    pub enemies_destroyed: u32,
    pub enemies_arrived: u32,
    pub shots_fired: u32,
    pub ship_destroyed: bool,
    pub mission_time_secs: f64,
}
