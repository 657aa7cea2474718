//! Simulation engine for SKYRAID.
//!
//! Owns the hecs ECS world, runs the per-tick systems in a fixed order,
//! and produces GameStateSnapshots for the front end.

pub mod camera;
pub mod config;
pub mod engine;
pub mod registry;
pub mod relations;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use skyraid_core as core;
