//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or in the engine.
//! Only `LifeState::Active` entities are processed.

pub mod bomb;
pub mod cleanup;
pub mod collision;
pub mod enemy;
pub mod marker;
pub mod missile;
pub mod ship;
pub mod snapshot;
pub mod wave_spawner;
