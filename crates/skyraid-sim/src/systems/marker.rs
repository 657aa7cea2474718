//! Marker upkeep: a marker whose enemy no longer exists is dead too.
//!
//! Enemy destruction normally signals the marker itself; this catches
//! enemies removed from the world by any other path.

use hecs::{Entity, World};

use skyraid_core::components::Marker;
use skyraid_core::enums::LifeState;

use crate::relations::MarkerTarget;

/// Returns the number of markers orphaned this tick.
pub fn run(world: &mut World) -> usize {
    let orphans: Vec<Entity> = world
        .query::<(&Marker, &MarkerTarget, &LifeState)>()
        .iter()
        .filter(|(_, (_, target, state))| {
            **state != LifeState::Dead && !world.contains(target.enemy)
        })
        .map(|(entity, _)| entity)
        .collect();

    for &marker in &orphans {
        if let Ok(mut state) = world.get::<&mut LifeState>(marker) {
            *state = LifeState::Dead;
        }
    }
    orphans.len()
}
