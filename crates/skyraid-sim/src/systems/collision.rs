//! Shared AABB helpers for the late-update collision passes.

use hecs::{Entity, World};

use skyraid_core::components::Collider;
use skyraid_core::enums::LifeState;
use skyraid_core::types::{Aabb, Transform};

use crate::registry::EnemyRegistry;

/// World box of an entity, if it has a transform and a collider.
pub fn world_box(world: &World, entity: Entity) -> Option<Aabb> {
    let transform = world.get::<&Transform>(entity).ok()?;
    let collider = world.get::<&Collider>(entity).ok()?;
    Some(collider.object_box.transformed(&transform))
}

/// World boxes of every live registered enemy, in registry order.
pub fn live_enemy_boxes(world: &World, registry: &EnemyRegistry) -> Vec<(Entity, Aabb)> {
    registry
        .iter()
        .filter(|&enemy| {
            world
                .get::<&LifeState>(enemy)
                .is_ok_and(|state| *state == LifeState::Active)
        })
        .filter_map(|enemy| world_box(world, enemy).map(|b| (enemy, b)))
        .collect()
}
