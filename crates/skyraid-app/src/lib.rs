//! SKYRAID command-line application.
//!
//! This crate wires the simulation crates into a headless runner: a batch
//! mode that steps the engine as fast as possible and a real-time mode that
//! runs it on a paced game-loop thread.

pub mod cli;
pub mod game_loop;
pub mod logging;
pub mod script;
pub mod state;

pub use skyraid_core as core;
