//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle state carried by every entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeState {
    /// Receives input, update and late-update every tick.
    #[default]
    Active,
    /// Kept in the world but skipped by every system.
    Paused,
    /// Waiting to be reaped by the cleanup system.
    Dead,
}

/// Enemy approach pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// Flies along its forward vector.
    #[default]
    Straight,
    /// Flies along its forward vector while bobbing vertically.
    Shake,
}

/// How an arrived enemy applies its happy rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HappySpin {
    /// Yaw is assigned the happy value every tick (orientation freezes).
    #[default]
    Absolute,
    /// Yaw advances by the happy value per second (visible spin).
    Accumulate,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// The ship is gone but the world keeps running.
    GameOver,
}
