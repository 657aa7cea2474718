//! Enemy behaviour for SKYRAID.
//!
//! Pure functions with no ECS dependency: deployment geometry and the
//! per-tick motion state machine (idle, approach, arrived).

pub mod deploy;
pub mod fsm;

#[cfg(test)]
mod tests;
