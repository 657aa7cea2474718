//! Cleanup system: reaps dead entities and destroys dead enemies.
//!
//! Order matters. Dead non-enemy entities (markers included) are despawned
//! first; dead enemies are destroyed afterwards, which only signals their
//! markers `Dead`. Those markers are reaped on the following pass.

use hecs::{Entity, World};

use skyraid_core::components::Enemy;
use skyraid_core::enums::LifeState;
use skyraid_core::events::GameEvent;

use crate::registry::EnemyRegistry;
use crate::score::ScoreState;
use crate::world_setup;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    registry: &mut EnemyRegistry,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    for (entity, (state, enemy)) in world.query_mut::<(&LifeState, Option<&Enemy>)>() {
        if *state == LifeState::Dead && enemy.is_none() {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (entity, (state, _enemy)) in world.query_mut::<(&LifeState, &Enemy)>() {
        if *state == LifeState::Dead {
            despawn_buffer.push(entity);
        }
    }
    for enemy in despawn_buffer.drain(..) {
        let marker = world_setup::destroy_enemy(world, registry, enemy);
        score.enemies_destroyed += 1;
        events.push(GameEvent::EnemyDestroyed {
            enemy: enemy.to_bits().get(),
            marker: marker.map(|m| m.to_bits().get()),
        });
    }
}
